//! Output rendering for fix reports.
//!
//! Supports `human` (default) and `json` outputs. Human output is the raw
//! unified diff of each changed file, each block followed by two blank lines.
//! The JSON form includes per-file fields, a top-level summary, and the
//! fatal error (or `null`) that ended the run.

use crate::models::{FileReport, Summary};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::IsTerminal;

/// Colors only for human output on a terminal, and never with `NO_COLOR`.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Render one report as a human diff block, or `None` when nothing changed.
pub fn render_human(report: &FileReport, color: bool) -> Option<String> {
    let diff = report.diff.as_deref().filter(|d| !d.is_empty())?;
    let mut out = String::with_capacity(diff.len() + 3);
    if color {
        for line in diff.split_inclusive('\n') {
            out.push_str(&colorize_line(line));
        }
    } else {
        out.push_str(diff);
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("\n\n");
    Some(out)
}

fn colorize_line(line: &str) -> String {
    let (text, eol) = match line.strip_suffix('\n') {
        Some(text) => (text, "\n"),
        None => (line, ""),
    };
    let painted = if text.starts_with("+++") || text.starts_with("---") {
        text.bold().to_string()
    } else if text.starts_with("@@") {
        text.cyan().to_string()
    } else if text.starts_with('+') {
        text.green().to_string()
    } else if text.starts_with('-') {
        text.red().to_string()
    } else {
        text.to_string()
    };
    format!("{}{}", painted, eol)
}

/// Print one report immediately (human mode).
pub fn print_human(report: &FileReport, color: bool) {
    if let Some(block) = render_human(report, color) {
        print!("{}", block);
    }
}

/// Compose the JSON document (pure) for testing/snapshot purposes.
pub fn compose_json(reports: &[FileReport], summary: &Summary, error: Option<&str>) -> JsonVal {
    json!({
        "results": reports,
        "summary": summary,
        "error": error,
    })
}

/// Print all reports as a single JSON document.
pub fn print_json(reports: &[FileReport], summary: &Summary, error: Option<&str>) {
    let doc = compose_json(reports, summary, error);
    match serde_json::to_string_pretty(&doc) {
        Ok(s) => println!("{}", s),
        Err(e) => log::error!("failed to serialize report: {}", e),
    }
}
