//! Check command implementation.

use anyhow::{Context, Result};
use pystyle::{IssueCode, LintResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config_resolver;
use crate::source_reader;
use crate::CheckArgs;

/// Runs the check command.
pub fn run(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let source = config_resolver::resolve(&cwd, config_path);
    let mut config = source.load()?;
    config.analyzer.exclude.extend(args.exclude);

    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let files = source_reader::discover(&path, &config.analyzer)?;

    let engine = pystyle::engine_with_config(config).context("Failed to set up the analyzer")?;
    let disabled = IssueCode::ALL
        .iter()
        .filter(|code| !engine.config().is_code_enabled(**code))
        .count();
    tracing::debug!(
        "Analyzing {} file(s) with {} rule set(s), {} code(s) disabled",
        files.len(),
        engine.rule_count(),
        disabled
    );

    let mut result = LintResult::new();
    let mut sources = BTreeMap::new();
    for file in files {
        let text = source_reader::read(&file)?;
        result.push(engine.analyze_file(&file, &text));
        sources.insert(file, text);
    }

    super::output::print(&result, &sources, args.format)?;

    if result.is_clean() {
        tracing::info!("No issues found in {} file(s)", result.files_checked());
    } else {
        tracing::info!(
            "Found {} issue(s) in {} file(s)",
            result.issue_count(),
            result.files_checked()
        );
    }
    if result.parse_failures() > 0 {
        tracing::info!(
            "{} file(s) could not be parsed; naming checks were skipped for them",
            result.parse_failures()
        );
    }

    Ok(())
}
