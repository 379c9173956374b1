//! Shared data models for directives and per-file fix reports.

pub mod directive;

pub use directive::Directive;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// Outcome of processing a single template file.
pub struct FileReport {
    pub file: String,
    pub changed: bool,
    pub wrote: bool,
    /// Unified diff of original vs. fixed content, present only when changed.
    pub diff: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
/// Aggregated counts over one run.
pub struct Summary {
    pub changed: usize,
    pub total: usize,
    pub wrote: usize,
}

impl Summary {
    pub fn record(&mut self, report: &FileReport) {
        self.total += 1;
        if report.changed {
            self.changed += 1;
        }
        if report.wrote {
            self.wrote += 1;
        }
    }
}
