//! List command implementation.

use anyhow::Result;
use console::style;

use crate::commands::common::open_store;

/// Execute the list command.
pub fn execute(templates_dir: Option<&str>) -> Result<()> {
    let store = open_store(templates_dir)?;

    println!("{} Available templates:\n", style("rmbatch").cyan().bold());
    for template in store.templates() {
        let scheduler = template
            .scheduler()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "?".to_string());
        let queue = template.queue().unwrap_or("-");
        println!(
            "  {} ({scheduler}, queue {})",
            style(template.name()).bold(),
            style(queue).dim()
        );
    }

    Ok(())
}
