//! rmbatch Command-Line Interface
//!
//! Renders batch-submission script templates for PBS and SLURM clusters.
//! Rendering is a pure text transformation; submitting the result with
//! `qsub` or `sbatch` is left to the caller.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{list, render, vars, version};

/// rmbatch - batch-script template renderer for HPC experiment pipelines
#[derive(Parser)]
#[command(name = "rmbatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template against one parameter set per pass
    Render {
        /// Template name (builtin or from --templates-dir)
        template: String,

        /// Parameter files (YAML or JSON); each file is one rendering
        /// pass, applied in order
        params: Vec<String>,

        /// Extra key=value pairs merged into the first pass
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Directory of *.tpl files overlaying the builtin templates
        #[arg(long)]
        templates_dir: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the placeholder variables a template expects
    Vars {
        /// Template name
        template: String,

        /// Directory of *.tpl files overlaying the builtin templates
        #[arg(long)]
        templates_dir: Option<String>,
    },

    /// List available templates
    List {
        /// Directory of *.tpl files overlaying the builtin templates
        #[arg(long)]
        templates_dir: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Render {
            template,
            params,
            set,
            templates_dir,
            output,
        } => render::execute(
            &template,
            &params,
            &set,
            templates_dir.as_deref(),
            output.as_deref(),
        ),

        Commands::Vars {
            template,
            templates_dir,
        } => vars::execute(&template, templates_dir.as_deref()),

        Commands::List { templates_dir } => list::execute(templates_dir.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
