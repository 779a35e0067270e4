//! # pystyle-core
//!
//! Core framework for the pystyle Python style checker.
//!
//! This crate provides the data model and orchestration shared by every
//! check. It includes:
//!
//! - [`SourceLine`] for the textual pass over physical lines
//! - [`SyntaxNode`] / [`SyntaxTree`] and the [`SyntaxTreeProvider`] trait for
//!   the structural pass
//! - [`LineRule`] and [`TreeRule`] traits for checks
//! - [`IssueAggregator`] for ordering issues
//! - [`Engine`] for running all checks over one file
//! - [`Issue`] / [`IssueCode`] and the fixed [`RULES`] table
//!
//! ## Example
//!
//! ```ignore
//! use pystyle_core::Engine;
//!
//! let engine = Engine::builder()
//!     .line_rule(MyLineRule)
//!     .tree_rule(MyTreeRule)
//!     .parser(MyParser::new())
//!     .build()?;
//!
//! for issue in engine.analyze("x = 1;\n") {
//!     println!("{issue}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregator;
mod config;
mod engine;
mod rule;
mod source;
mod syntax;
mod types;

pub use aggregator::IssueAggregator;
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use engine::{Engine, EngineBuilder, EngineError};
pub use rule::{LineRule, LineRuleBox, TreeRule, TreeRuleBox};
pub use source::{line_span, SourceLine};
pub use syntax::{DefaultValueKind, ParseFailure, SyntaxNode, SyntaxTree, SyntaxTreeProvider};
pub use types::{FileReport, Issue, IssueCode, IssueDiagnostic, LintResult, RuleInfo, RULES};
