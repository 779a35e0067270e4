//! Configuration types for pystyle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::types::IssueCode;

/// Top-level configuration for pystyle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by code ("S005") or rule name ("todo-comment").
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or names an
    /// unknown rule.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or names an unknown rule.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every `[rules.*]` key names a known rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRule`] for the first unknown key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut keys: Vec<&String> = self.rules.keys().collect();
        keys.sort();
        for key in keys {
            if IssueCode::lookup(key).is_none() {
                return Err(ConfigError::UnknownRule(key.clone()));
            }
        }
        Ok(())
    }

    /// Checks if issues with this code are reported.
    #[must_use]
    pub fn is_code_enabled(&self, code: IssueCode) -> bool {
        self.rules
            .iter()
            .filter(|(key, _)| IssueCode::lookup(key) == Some(code))
            .all(|(_, rule)| rule.enabled.unwrap_or(true))
    }

    /// Disables a rule by code.
    pub fn disable(&mut self, code: IssueCode) {
        self.rules.insert(
            code.as_str().to_string(),
            RuleConfig {
                enabled: Some(false),
            },
        );
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns of files to skip when a directory is analyzed.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl AnalyzerConfig {
    /// Checks if a path matches one of the exclude patterns.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/migrations/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && path_str.contains(&normalized_pattern)
            {
                return true;
            }
        }

        false
    }
}

/// Per-rule configuration.
///
/// Rules can only be switched on or off; their thresholds are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A `[rules.*]` section names no known rule.
    #[error("Unknown rule in config: '{0}'")]
    UnknownRule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.exclude.is_empty());
        assert!(config.rules.is_empty());
        assert!(IssueCode::ALL.iter().all(|c| config.is_code_enabled(*c)));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["**/migrations/**"]

[rules.S005]
enabled = false

[rules.line-too-long]
enabled = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, vec!["**/migrations/**"]);
        assert!(!config.is_code_enabled(IssueCode::S005));
        assert!(config.is_code_enabled(IssueCode::S001));
        assert!(config.is_code_enabled(IssueCode::S012));
    }

    #[test]
    fn rule_name_key_disables_code() {
        let config = Config::parse("[rules.mutable-default]\nenabled = false\n").unwrap();
        assert!(!config.is_code_enabled(IssueCode::S012));
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let err = Config::parse("[rules.S099]\nenabled = false\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule(ref k) if k == "S099"));
    }

    #[test]
    fn thresholds_are_not_configurable() {
        let err = Config::parse("[rules.S001]\nmax_length = 120\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn disable_turns_code_off() {
        let mut config = Config::new();
        config.disable(IssueCode::S003);
        assert!(!config.is_code_enabled(IssueCode::S003));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = AnalyzerConfig {
            exclude: vec!["**/migrations/**".into(), "*_pb2.py".into()],
        };
        assert!(analyzer.is_excluded(Path::new("app/migrations/0001.py")));
        assert!(analyzer.is_excluded(Path::new("proto_pb2.py")));
        assert!(!analyzer.is_excluded(Path::new("app/models.py")));
    }
}
