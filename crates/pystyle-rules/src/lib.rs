//! # pystyle-rules
//!
//! Built-in style checks for pystyle.
//!
//! ## Available Rules
//!
//! | Rule | Codes | Pass |
//! |------|-------|------|
//! | [`LineClassifier`] | S001, S002, S003, S004, S005, S007 | textual, per line |
//! | [`BlankLines`] | S006 | textual, sequential |
//! | [`NamingWalker`] | S008, S009, S010, S011, S012 | structural |
//!
//! ## Usage
//!
//! ```ignore
//! use pystyle_core::Engine;
//! use pystyle_rules::{BlankLines, LineClassifier, NamingWalker};
//!
//! let engine = Engine::builder()
//!     .line_rule(LineClassifier::new())
//!     .line_rule(BlankLines::new())
//!     .tree_rule(NamingWalker::new())
//!     .parser(parser)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blank_lines;
mod line_checks;
mod naming;
mod presets;

pub use blank_lines::{BlankLines, BlankRunTracker, MAX_BLANK_RUN};
pub use line_checks::{
    has_bad_indentation, has_definition_spacing, has_todo, has_trailing_semicolon, is_too_long,
    lacks_comment_gap, scan_line, LineClassifier, LineScan, INDENT_WIDTH, INLINE_COMMENT_GAP,
    MAX_LINE_LENGTH,
};
pub use naming::{is_camel_case, is_snake_case, NamingWalker};
pub use presets::{line_rules, tree_rules};

/// Re-export core types for convenience.
pub use pystyle_core::{Issue, IssueCode, LineRule, TreeRule};
