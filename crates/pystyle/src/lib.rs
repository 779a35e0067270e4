//! # pystyle
//!
//! PEP 8 style checker for Python source files.
//!
//! This is the facade crate: it re-exports the core types and wires the
//! built-in rules to the Tree-sitter Python parser.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let issues = pystyle::analyze("def f(badArg=[]):\n    pass\n")?;
//! for issue in &issues {
//!     println!("{issue}");
//! }
//! // Line 1: S010 Argument name `badArg` should be written in snake_case
//! // Line 1: S012 The default argument value is mutable
//! ```
//!
//! ## With Configuration
//!
//! ```rust,ignore
//! use pystyle::Config;
//!
//! let config = Config::parse("[rules.todo-comment]\nenabled = false\n")?;
//! let engine = pystyle::engine_with_config(config)?;
//! let report = engine.analyze_file(path, &text);
//! ```

#![forbid(unsafe_code)]

pub use pystyle_core::*;
pub use pystyle_ts::{LanguageError, PythonParser};

/// Built-in rules and rule sets.
pub mod rules {
    pub use pystyle_rules::*;
}

/// Errors raised while assembling the default engine.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The Python grammar could not be loaded.
    #[error(transparent)]
    Language(#[from] LanguageError),

    /// The engine rejected its rule set.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Builds an engine with every built-in rule and the default configuration.
///
/// # Errors
///
/// Returns [`SetupError`] if the Python grammar cannot be loaded.
pub fn default_engine() -> Result<Engine, SetupError> {
    engine_with_config(Config::default())
}

/// Builds an engine with every built-in rule and the given configuration.
///
/// # Errors
///
/// Returns [`SetupError`] if the Python grammar cannot be loaded.
pub fn engine_with_config(config: Config) -> Result<Engine, SetupError> {
    let mut builder = Engine::builder()
        .parser(PythonParser::new()?)
        .config(config);
    for rule in pystyle_rules::line_rules() {
        builder = builder.line_rule_box(rule);
    }
    for rule in pystyle_rules::tree_rules() {
        builder = builder.tree_rule_box(rule);
    }
    Ok(builder.build()?)
}

/// Analyzes one file's text with the default engine.
///
/// Issues are ordered by line, then by code. A syntax error is not an
/// error here: the structural checks are skipped and the line checks
/// still report.
///
/// # Errors
///
/// Returns [`SetupError`] if the default engine cannot be built.
pub fn analyze(text: &str) -> Result<Vec<Issue>, SetupError> {
    Ok(default_engine()?.analyze(text))
}
