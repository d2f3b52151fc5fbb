//! Vars command implementation.

use anyhow::Result;
use console::style;

use crate::commands::common::open_store;

/// Execute the vars command: show the placeholder variables a template
/// expects, split by rendering pass.
pub fn execute(template: &str, templates_dir: Option<&str>) -> Result<()> {
    let store = open_store(templates_dir)?;
    let template = store.get(template)?;
    let placeholders = template.placeholders()?;

    println!(
        "{} {} expects:",
        style("Template").cyan().bold(),
        style(template.name()).green()
    );
    println!();
    println!("First pass:");
    for name in &placeholders.immediate {
        println!("  {name}");
    }

    if !placeholders.deferred.is_empty() {
        println!();
        println!("Second pass (doubled-brace, deferred):");
        for name in &placeholders.deferred {
            println!("  {name}");
        }
    }

    Ok(())
}
