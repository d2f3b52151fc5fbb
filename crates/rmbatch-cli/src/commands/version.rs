//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - batch-script template renderer for PBS and SLURM",
        style("rmbatch").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  rmbatch-tmpl  Template store and two-pass placeholder renderer");
    println!("  rmbatch-cli   Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/rmbatch/rmbatch").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
