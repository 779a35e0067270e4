//! Engine facade composing the textual and structural passes.

use crate::aggregator::IssueAggregator;
use crate::config::Config;
use crate::rule::{LineRule, LineRuleBox, TreeRule, TreeRuleBox};
use crate::source::SourceLine;
use crate::syntax::{ParseFailure, SyntaxTreeProvider};
use crate::types::{FileReport, Issue};

use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while building an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Tree rules were registered without a parser to feed them.
    #[error("{count} tree rule(s) registered but no syntax tree provider was set")]
    MissingParser {
        /// Number of orphaned tree rules.
        count: usize,
    },
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    line_rules: Vec<LineRuleBox>,
    tree_rules: Vec<TreeRuleBox>,
    parser: Option<Box<dyn SyntaxTreeProvider>>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line rule.
    #[must_use]
    pub fn line_rule<R: LineRule + 'static>(mut self, rule: R) -> Self {
        self.line_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed line rule.
    #[must_use]
    pub fn line_rule_box(mut self, rule: LineRuleBox) -> Self {
        self.line_rules.push(rule);
        self
    }

    /// Adds a tree rule.
    #[must_use]
    pub fn tree_rule<R: TreeRule + 'static>(mut self, rule: R) -> Self {
        self.tree_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed tree rule.
    #[must_use]
    pub fn tree_rule_box(mut self, rule: TreeRuleBox) -> Self {
        self.tree_rules.push(rule);
        self
    }

    /// Sets the syntax tree provider used by tree rules.
    #[must_use]
    pub fn parser<P: SyntaxTreeProvider + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if tree rules were added without a parser.
    pub fn build(self) -> Result<Engine, EngineError> {
        if self.parser.is_none() && !self.tree_rules.is_empty() {
            return Err(EngineError::MissingParser {
                count: self.tree_rules.len(),
            });
        }

        Ok(Engine {
            line_rules: self.line_rules,
            tree_rules: self.tree_rules,
            parser: self.parser,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// Runs every registered check over one file's text.
///
/// Use [`Engine::builder()`] to construct an instance. The engine keeps no
/// state between calls, so one instance can serve any number of files.
pub struct Engine {
    line_rules: Vec<LineRuleBox>,
    tree_rules: Vec<TreeRuleBox>,
    parser: Option<Box<dyn SyntaxTreeProvider>>,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.line_rules.len() + self.tree_rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes `text` and returns its issues ordered by line, then code.
    ///
    /// A parse failure only drops the structural issues.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Vec<Issue> {
        self.run(text).0
    }

    /// Analyzes one file's text and records a parse failure, if any.
    #[must_use]
    pub fn analyze_file(&self, path: &Path, text: &str) -> FileReport {
        debug!("Analyzing: {}", path.display());

        let (issues, parse_failure) = self.run(text);
        if let Some(failure) = &parse_failure {
            warn!("Failed to parse {}: {}", path.display(), failure);
        }

        FileReport {
            path: path.to_path_buf(),
            issues,
            parse_failure,
        }
    }

    fn run(&self, text: &str) -> (Vec<Issue>, Option<ParseFailure>) {
        let lines = SourceLine::split(text);
        let mut aggregator = IssueAggregator::new();

        for rule in &self.line_rules {
            let found = rule.check(&lines);
            debug!("{}: {} issue(s)", rule.name(), found.len());
            aggregator.extend(found);
        }

        let mut parse_failure = None;
        if let Some(parser) = &self.parser {
            match parser.parse(text) {
                Ok(tree) => {
                    for rule in &self.tree_rules {
                        let found = rule.check(&tree);
                        debug!("{}: {} issue(s)", rule.name(), found.len());
                        aggregator.extend(found);
                    }
                }
                Err(failure) => parse_failure = Some(failure),
            }
        }

        let issues = aggregator
            .finish()
            .into_iter()
            .filter(|issue| self.config.is_code_enabled(issue.code))
            .collect();

        (issues, parse_failure)
    }
}
