//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - lattice circuit reader and entanglement diagnostics",
        style("QFlex").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qflex-ir        Lattice circuit intermediate representation");
    println!("  qflex-parse     Grid and circuit text readers");
    println!("  qflex-analysis  Schmidt rank diagnostics");
    println!("  qflex-cli       Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
