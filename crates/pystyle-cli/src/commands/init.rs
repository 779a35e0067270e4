//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "pystyle.toml";

const DEFAULT_CONFIG: &str = r#"# pystyle configuration

[analyzer]
# Glob patterns of files to skip when a directory is checked
exclude = [
    "**/migrations/**",
]

# Rules are keyed by code ("S005") or name ("todo-comment").
# Every rule is enabled unless switched off here.

[rules.todo-comment]
enabled = true

# [rules.S001]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_default(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to switch rules on or off");
    println!("  2. Run: pystyle check <PATH>");

    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = pystyle::Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config
            .rules
            .keys()
            .all(|k| pystyle::IssueCode::lookup(k).is_some()));
        assert!(pystyle::IssueCode::ALL
            .iter()
            .all(|c| config.is_code_enabled(*c)));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_default(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
