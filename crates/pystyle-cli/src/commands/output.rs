//! Shared output formatting for lint results.

use anyhow::Result;
use miette::NamedSource;
use pystyle::{IssueCode, IssueDiagnostic, LintResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// One issue in the JSON report.
#[derive(Debug, Serialize)]
struct JsonIssue<'a> {
    path: &'a Path,
    line: usize,
    code: IssueCode,
    message: String,
}

/// Print lint results to stdout in the specified format.
///
/// `sources` maps each analyzed path to its text; only the pretty format
/// reads it.
pub fn print(
    result: &LintResult,
    sources: &BTreeMap<PathBuf, String>,
    format: OutputFormat,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write(&mut out, result, sources, format)?;
    out.flush()?;
    Ok(())
}

fn write(
    out: &mut impl Write,
    result: &LintResult,
    sources: &BTreeMap<PathBuf, String>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result),
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Pretty => write_pretty(out, result, sources),
    }
}

fn write_text(out: &mut impl Write, result: &LintResult) -> Result<()> {
    for report in &result.files {
        for line in report.lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, result: &LintResult) -> Result<()> {
    let issues: Vec<JsonIssue<'_>> = result
        .files
        .iter()
        .flat_map(|report| {
            report.issues.iter().map(|issue| JsonIssue {
                path: &report.path,
                line: issue.line,
                code: issue.code,
                message: issue.message(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &issues)?;
    writeln!(out)?;
    Ok(())
}

fn write_pretty(
    out: &mut impl Write,
    result: &LintResult,
    sources: &BTreeMap<PathBuf, String>,
) -> Result<()> {
    for report in &result.files {
        let text = sources.get(&report.path).map_or("", String::as_str);
        let name = report.path.display().to_string();

        for issue in &report.issues {
            let diagnostic = miette::Report::new(IssueDiagnostic::new(issue, text))
                .with_source_code(NamedSource::new(&name, text.to_owned()));
            writeln!(out, "{diagnostic:?}")?;
        }
    }
    Ok(())
}
