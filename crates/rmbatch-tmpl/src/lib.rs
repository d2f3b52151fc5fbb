//! Batch-script template store and renderer for PBS and SLURM.
//!
//! This crate holds the static job-script templates an experiment pipeline
//! submits to HPC batch schedulers, and implements the rendering contract
//! those templates imply: a pure, fail-closed, two-pass placeholder
//! expansion. It deliberately stops there — no scheduling, no submission,
//! no retries; `qsub`/`sbatch` belong to the surrounding system.
//!
//! # Supported schedulers
//!
//! | Scheduler | Directive marker | Builtin templates |
//! |-----------|------------------|-------------------|
//! | PBS/Torque | `#PBS` | `pbs-phase3`, `pbs-a64fx` |
//! | SLURM | `#SBATCH` | `slurm-phase3` |
//!
//! Directive lines are opaque text to the renderer; only placeholder
//! tokens inside them are touched.
//!
//! # Placeholders
//!
//! A `{name}` token is resolved by the current rendering pass. A
//! `{{name}}` token is deferred: the pass collapses it to a literal
//! `{name}`, which the next pass resolves against its own (possibly
//! different) parameter set. Every token due in a pass must be supplied a
//! value, or the pass fails with [`TmplError::UnresolvedPlaceholder`] —
//! partially substituted text is never returned as a success.
//!
//! # Example
//!
//! ```
//! use rmbatch_tmpl::{ParamSet, TemplateStore, render};
//!
//! let store = TemplateStore::builtin();
//! let template = store.get("slurm-phase3")?;
//!
//! let params = ParamSet::from_pairs([
//!     ("application_name", "foo"),
//!     ("workload_name", "bar"),
//!     ("experiment_name", "baz"),
//!     ("partition", "high"),
//!     ("n_nodes", "4"),
//!     ("processes_per_node", "8"),
//!     ("experiment_run_dir", "/data/exp1"),
//!     ("command", "./run.sh"),
//! ]);
//!
//! let script = render(template, &[params])?;
//! assert!(script.contains("#SBATCH -J foo_bar_baz"));
//! assert!(script.contains("cd \"/data/exp1\""));
//! # Ok::<(), rmbatch_tmpl::TmplError>(())
//! ```

pub mod error;
pub mod params;
pub mod render;
pub mod scan;
pub mod store;
pub mod template;

// Re-exports
pub use error::{TmplError, TmplResult};
pub use params::ParamSet;
pub use render::{expand, render};
pub use scan::{Segment, scan};
pub use store::TemplateStore;
pub use template::{Placeholders, Scheduler, Template};
