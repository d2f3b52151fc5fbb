//! Render command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use rmbatch_tmpl::{ParamSet, render};

use crate::commands::common::open_store;

/// Execute the render command.
///
/// Each parameter file is one rendering pass, applied in order; `--set`
/// pairs merge into the first pass (creating it when no file was given).
/// The script goes to `output` when set, otherwise to stdout — status
/// lines stay off stdout so `rmbatch render ... > job.sh` pipes cleanly.
pub fn execute(
    template: &str,
    params_files: &[String],
    sets: &[String],
    templates_dir: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let store = open_store(templates_dir)?;
    let template = store.get(template)?;

    let passes = build_passes(params_files, sets)?;
    let script = render(template, &passes)
        .with_context(|| format!("Failed to render template '{}'", template.name()))?;

    match output {
        Some(path) => {
            fs::write(path, &script).with_context(|| format!("Failed to write {path}"))?;
            println!(
                "{} Rendered {} ({} passes) to {}",
                style("✓").green().bold(),
                style(template.name()).green(),
                passes.len(),
                style(path).green()
            );
        }
        None => print!("{script}"),
    }

    Ok(())
}

/// Build one parameter set per pass from the given files and `--set` pairs.
fn build_passes(params_files: &[String], sets: &[String]) -> Result<Vec<ParamSet>> {
    let mut passes = Vec::with_capacity(params_files.len().max(1));
    for file in params_files {
        let params = ParamSet::from_file(Path::new(file))
            .with_context(|| format!("Failed to load parameters from {file}"))?;
        passes.push(params);
    }

    if !sets.is_empty() {
        let mut overrides = ParamSet::new();
        for assignment in sets {
            let (key, value) = ParamSet::parse_assignment(assignment)?;
            overrides.insert(key, value);
        }
        match passes.first_mut() {
            Some(first) => first.merge(overrides),
            None => passes.push(overrides),
        }
    }

    if passes.is_empty() {
        anyhow::bail!("No parameters given; pass a params file or --set key=value");
    }
    Ok(passes)
}
