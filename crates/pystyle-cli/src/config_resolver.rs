//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file using a fixed priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{cwd}/pystyle.toml` or `{cwd}/.pystyle.toml`
//! 3. `$PYSTYLE_CONFIG_DIR/config.toml`, else `~/.pystyle/config.toml`
//! 4. No config found → defaults

use anyhow::{Context, Result};
use pystyle::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or names an
    /// unknown rule. An explicit path that does not exist is an error too.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["pystyle.toml", ".pystyle.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global config directory.
pub const CONFIG_DIR_ENV: &str = "PYSTYLE_CONFIG_DIR";

/// Resolves the configuration file for a run started in `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir().as_deref())
}

fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let project = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file());
    if let Some(found) = project {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(found) if found.is_file() => {
            tracing::debug!("Found global config: {}", found.display());
            ConfigSource::Global(found)
        }
        _ => ConfigSource::Default,
    }
}

/// Returns the global config directory: `$PYSTYLE_CONFIG_DIR`, else
/// `~/.pystyle/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".pystyle"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_and_is_not_checked_for_existence() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("pystyle.toml"), "").unwrap();

        let result = resolve_with_global(project.path(), Some(Path::new("missing.toml")), None);
        assert_eq!(result, ConfigSource::Explicit(PathBuf::from("missing.toml")));
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".pystyle.toml"), "").unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, None),
            ConfigSource::Project(project.path().join(".pystyle.toml"))
        );

        fs::write(project.path().join("pystyle.toml"), "").unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, None),
            ConfigSource::Project(project.path().join("pystyle.toml"))
        );
    }

    #[test]
    fn global_used_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        assert_eq!(
            resolve_with_global(project.path(), None, Some(global.path())),
            ConfigSource::Global(global.path().join("config.toml"))
        );

        fs::write(project.path().join("pystyle.toml"), "").unwrap();
        assert!(matches!(
            resolve_with_global(project.path(), None, Some(global.path())),
            ConfigSource::Project(_)
        ));
    }

    #[test]
    fn empty_global_dir_falls_back_to_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, Some(global.path())),
            ConfigSource::Default
        );
    }

    #[test]
    fn default_loads_empty_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(config.rules.is_empty());
        assert!(config.analyzer.exclude.is_empty());
    }

    #[test]
    fn load_reads_rules_and_excludes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pystyle.toml");
        fs::write(
            &path,
            "[analyzer]\nexclude = [\"**/migrations/**\"]\n\n[rules.todo-comment]\nenabled = false\n",
        )
        .unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert!(!config.is_code_enabled(pystyle::IssueCode::S005));
        assert_eq!(config.analyzer.exclude, vec!["**/migrations/**"]);
    }

    #[test]
    fn load_rejects_unknown_rule() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pystyle.toml");
        fs::write(&path, "[rules.S099]\nenabled = false\n").unwrap();

        let err = ConfigSource::Explicit(path).load().unwrap_err();
        assert!(format!("{err:#}").contains("S099"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let source = ConfigSource::Explicit(dir.path().join("nope.toml"));
        assert!(source.load().is_err());
    }
}
