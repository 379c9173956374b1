//! Candidate template discovery.
//!
//! A path argument resolves to one of:
//! - an existing file, processed on its own whatever its name;
//! - an existing directory, scanned recursively for the template suffix;
//! - anything else, in which case the working directory is scanned instead.
//!
//! Directory scans are lazy glob walks; hidden entries are skipped.

use crate::error::{FixError, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Default Twirl HTML template suffix.
pub const DEFAULT_SUFFIX: &str = ".scala.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Tree(PathBuf),
}

/// Resolve the user-supplied path against the filesystem.
///
/// `cwd` is the directory scanned when `path` is absent or does not exist.
pub fn resolve_target(path: Option<&Path>, cwd: &Path) -> Target {
    match path {
        Some(p) if p.is_file() => Target::File(p.to_path_buf()),
        Some(p) if p.exists() => Target::Tree(p.to_path_buf()),
        Some(p) => {
            log::warn!(
                "{} does not exist; scanning {} instead",
                p.display(),
                cwd.display()
            );
            Target::Tree(cwd.to_path_buf())
        }
        None => Target::Tree(cwd.to_path_buf()),
    }
}

/// Build the recursive glob pattern for `root`. The root is escaped so
/// metacharacters in directory names match literally.
pub fn tree_pattern(root: &Path, suffix: &str) -> String {
    let base = Pattern::escape(&root.to_string_lossy());
    let base = base.trim_end_matches(std::path::MAIN_SEPARATOR);
    format!(
        "{}{}**{}*{}",
        base,
        std::path::MAIN_SEPARATOR,
        std::path::MAIN_SEPARATOR,
        Pattern::escape(suffix)
    )
}

/// Lazily yield the files to process for `target`.
pub fn candidates(
    target: &Target,
    suffix: &str,
) -> Result<Box<dyn Iterator<Item = Result<PathBuf>>>> {
    match target {
        Target::File(path) => Ok(Box::new(std::iter::once(Ok(path.clone())))),
        Target::Tree(root) => {
            let pattern = tree_pattern(root, suffix);
            log::debug!("scanning {}", pattern);
            let options = MatchOptions {
                require_literal_leading_dot: true,
                ..MatchOptions::new()
            };
            let paths = glob::glob_with(&pattern, options)
                .map_err(|source| FixError::Pattern { pattern, source })?;
            Ok(Box::new(paths.filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(Ok(path)),
                Ok(_) => None,
                Err(err) => Some(Err(FixError::from(err))),
            })))
        }
    }
}
