//! List rules command implementation.

use pystyle::RULES;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<6} {:<24} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in &RULES {
        println!("{:<6} {:<24} {}", rule.code.as_str(), rule.name, rule.description);
    }

    println!("\nDisable a rule by code or name in pystyle.toml, e.g.:");
    println!("  [rules.S005]");
    println!("  enabled = false");
}
