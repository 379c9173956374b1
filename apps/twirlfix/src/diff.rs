//! Unified diff rendering for fixed templates.
//!
//! Hunks come from `similar`; headers and line prefixes are written here so
//! that a final line without a terminator cannot run into the next one.

use similar::{ChangeTag, TextDiff};
use std::ops::Range;

const CONTEXT_LINES: usize = 3;

/// Render a unified diff of `original` vs. `fixed`, labelling the new side
/// with `target`. Returns an empty string when the sequences are equal.
///
/// Every line of the result except possibly the last ends with `\n`.
pub fn unified<A: AsRef<str>, B: AsRef<str>>(original: &[A], fixed: &[B], target: &str) -> String {
    let old: Vec<&str> = original.iter().map(<A as AsRef<str>>::as_ref).collect();
    let new: Vec<&str> = fixed.iter().map(<B as AsRef<str>>::as_ref).collect();
    let diff = TextDiff::from_slices(old.as_slice(), new.as_slice());

    let mut lines: Vec<String> = Vec::new();
    for group in diff.grouped_ops(CONTEXT_LINES) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        if lines.is_empty() {
            lines.push("--- \n".to_string());
            lines.push(format!("+++ {}\n", target));
        }
        let old_range = first.old_range().start..last.old_range().end;
        let new_range = first.new_range().start..last.new_range().end;
        lines.push(format!(
            "@@ -{} +{} @@\n",
            format_range(&old_range),
            format_range(&new_range)
        ));
        for op in &group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                lines.push(format!("{}{}", sign, change.value()));
            }
        }
    }

    terminate_lines(lines).concat()
}

/// GNU style `start,len` hunk range (1-based; `len` omitted when 1).
fn format_range(range: &Range<usize>) -> String {
    let len = range.end - range.start;
    match len {
        1 => format!("{}", range.start + 1),
        // An empty range points at the line before the change.
        0 => format!("{},0", range.start),
        _ => format!("{},{}", range.start + 1, len),
    }
}

/// Ensure every line but the last carries a trailing newline.
fn terminate_lines(mut lines: Vec<String>) -> Vec<String> {
    let count = lines.len();
    for line in lines.iter_mut().take(count.saturating_sub(1)) {
        if !line.ends_with('\n') {
            line.push('\n');
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_inputs_yield_empty_diff() {
        let lines = ["@(a: Int)\n", "\n", "body\n"];
        assert_eq!(unified(&lines, &lines, "x.scala.html"), "");
    }

    #[test]
    fn test_header_and_hunk_for_moved_import() {
        let old = ["body\n", "@import a.B\n", "@(p: P)\n"];
        let new = ["@import a.B\n", "\n", "@(p: P)\n", "\n", "body\n"];
        let out = unified(&old, &new, "views/index.scala.html");
        assert!(out.starts_with("--- \n+++ views/index.scala.html\n@@ -1,3 +1,5 @@\n"));
        assert!(out.contains("-body\n"));
        assert!(out.contains("+body\n"));
        assert!(out.contains(" @import a.B\n"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_missing_final_newline_does_not_run_together() {
        let old = ["</div>", "@(p: P)\n"];
        let new = ["@(p: P)\n", "\n", "</div>"];
        let out = unified(&old, &new, "t.scala.html");
        assert!(!out.contains("</div>-"));
        assert!(!out.contains("</div>+"));
        assert!(!out.contains("</div> "));
        for line in out.lines() {
            assert!(
                line.starts_with(['-', '+', ' ', '@']),
                "malformed diff line: {line:?}"
            );
        }
    }

    #[test]
    fn test_format_range_matches_gnu() {
        assert_eq!(format_range(&(0..1)), "1");
        assert_eq!(format_range(&(4..4)), "4,0");
        assert_eq!(format_range(&(0..0)), "0,0");
        assert_eq!(format_range(&(2..7)), "3,5");
    }
}
