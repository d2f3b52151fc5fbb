//! Template entity: an immutable batch-script body plus derived views.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{TmplError, TmplResult};
use crate::scan::{Segment, scan};

/// Batch scheduler targeted by a template, inferred from its directive
/// marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheduler {
    Pbs,
    Slurm,
}

impl Scheduler {
    /// The comment marker that introduces a directive line.
    pub fn directive_marker(&self) -> &'static str {
        match self {
            Scheduler::Pbs => "#PBS",
            Scheduler::Slurm => "#SBATCH",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheduler::Pbs => "pbs",
            Scheduler::Slurm => "slurm",
        }
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheduler {
    type Err = TmplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pbs" | "torque" => Ok(Scheduler::Pbs),
            "slurm" => Ok(Scheduler::Slurm),
            other => Err(TmplError::InvalidParams(format!(
                "unknown scheduler: '{other}' (expected pbs or slurm)"
            ))),
        }
    }
}

/// Placeholder names referenced by a template, split by resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    /// `{name}` tokens resolved by the first pass.
    pub immediate: BTreeSet<String>,
    /// `{{name}}` tokens deferred to the second pass.
    pub deferred: BTreeSet<String>,
}

/// One scheduler job-script variant: a name and an immutable text body.
///
/// Templates are authored once as static assets and never mutated at
/// runtime; everything else on this type is a derived, read-only view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    body: String,
}

impl Template {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Read a template from a file; the file stem becomes its name.
    pub fn from_file(path: &Path) -> TmplResult<Self> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| TmplError::MissingTemplate(path.display().to_string()))?
            .to_string();
        let body = fs::read_to_string(path)?;
        Ok(Self { name, body })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Placeholder names referenced in the body, split into those the
    /// first pass resolves and those deferred to the second.
    pub fn placeholders(&self) -> TmplResult<Placeholders> {
        let mut placeholders = Placeholders::default();
        for segment in scan(&self.body)? {
            match segment {
                Segment::Placeholder(name) => {
                    placeholders.immediate.insert(name.to_string());
                }
                Segment::Deferred(name) => {
                    placeholders.deferred.insert(name.to_string());
                }
                Segment::Literal(_) => {}
            }
        }
        Ok(placeholders)
    }

    /// Scheduler targeted by this template, if any directive line is
    /// present. Directive contents stay opaque; only the marker is read.
    pub fn scheduler(&self) -> Option<Scheduler> {
        for line in self.body.lines() {
            if line.starts_with("#PBS") {
                return Some(Scheduler::Pbs);
            }
            if line.starts_with("#SBATCH") {
                return Some(Scheduler::Slurm);
            }
        }
        None
    }

    /// Scheduler directive lines, as opaque text.
    pub fn directives(&self) -> impl Iterator<Item = &str> {
        self.body
            .lines()
            .filter(|line| line.starts_with("#PBS") || line.starts_with("#SBATCH"))
    }

    /// Raw argument of the queue directive (`-q`), if present. The value
    /// may itself contain placeholders (e.g. `{partition}q`); it is a
    /// selection key, not parsed further.
    pub fn queue(&self) -> Option<&str> {
        for directive in self.directives() {
            let mut words = directive.split_whitespace();
            while let Some(word) = words.next() {
                if word == "-q" {
                    return words.next();
                }
            }
        }
        None
    }
}
