//! # pystyle-ts
//!
//! Tree-sitter based syntax tree provider for pystyle.
//!
//! [`PythonParser`] turns Python source into the small [`SyntaxTree`] the
//! naming checks walk. Only definitions, parameters and assignment targets
//! survive the conversion; everything else is descended into and dropped.
//!
//! ```ignore
//! use pystyle_core::SyntaxTreeProvider;
//! use pystyle_ts::PythonParser;
//!
//! let parser = PythonParser::new()?;
//! let tree = parser.parse("def f(x=[]):\n    pass\n")?;
//! ```
//!
//! [`SyntaxTree`]: pystyle_core::SyntaxTree

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod python;

pub use python::{LanguageError, PythonParser};
