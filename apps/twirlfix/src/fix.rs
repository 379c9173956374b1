//! File driver: read each candidate, reorder its header, write it back
//! unless dry, and report the change as a unified diff.
//!
//! Files are handled one at a time. The first error stops the run; files
//! handled before it keep their changes.

use crate::discover::{self, Target};
use crate::error::{FixError, Result};
use crate::models::{FileReport, Summary};
use crate::{diff, reorder};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FixOptions {
    /// Compute and report changes without touching files.
    pub dry: bool,
    /// Template file suffix used for directory scans.
    pub suffix: String,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            dry: false,
            suffix: discover::DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Process a single template file.
pub fn fix_file(path: &Path, dry: bool) -> Result<FileReport> {
    let label = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|e| FixError::io(path, e))?;
    let original: Vec<&str> = content.split_inclusive('\n').collect();
    let fixed = reorder::reorder(original.as_slice(), &label)?;

    if fixed.iter().map(String::as_str).eq(original.iter().copied()) {
        log::debug!("{}: already in order", label);
        return Ok(FileReport {
            file: label,
            changed: false,
            wrote: false,
            diff: None,
        });
    }

    if !dry {
        fs::write(path, fixed.concat()).map_err(|e| FixError::io(path, e))?;
        log::info!("rewrote {}", label);
    }
    let delta = diff::unified(original.as_slice(), fixed.as_slice(), &label);
    Ok(FileReport {
        file: label,
        changed: true,
        wrote: !dry,
        diff: Some(delta),
    })
}

/// Process every candidate of `target` in discovery order, handing each
/// report to `on_report` as soon as the file is done.
pub fn run_fix<F>(target: &Target, opts: &FixOptions, mut on_report: F) -> Result<Summary>
where
    F: FnMut(&FileReport),
{
    let mut summary = Summary::default();
    for path in discover::candidates(target, &opts.suffix)? {
        let report = fix_file(&path?, opts.dry)?;
        summary.record(&report);
        on_report(&report);
    }
    log::debug!(
        "processed {} file(s), {} changed, {} written",
        summary.total,
        summary.changed,
        summary.wrote
    );
    Ok(summary)
}
