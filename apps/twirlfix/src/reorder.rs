//! Header reordering for Twirl templates.
//!
//! IDE refactors and code formatters tend to scatter the header directives of
//! a template (`@import`, `@this(...)`, `@(...)`) into the body or shuffle
//! them. This module pulls them back out and emits them in canonical order:
//!
//! ```text
//! @import a.B
//! @import c.D
//!
//! @this(inject: Foo)
//! @(param: Int)
//!
//! <body...>
//! ```
//!
//! Design notes:
//! - Each line goes through three matchers in a fixed order: imports (any
//!   number, anywhere in the line), then the injector and the parameter list
//!   (each anchored at the start of what is left). A line can feed all three
//!   and still leave body text behind.
//! - A repeated injector or parameter directive overwrites the earlier one.
//! - A line consumed entirely by extraction is dropped, and so are the blank
//!   lines right after it (they were separators of the old header). Other
//!   blank lines are body content; only the leading run of the body is
//!   stripped on output.
//! - Emitted directive and separator lines use the terminator of the first
//!   terminated input line, so CRLF templates stay CRLF.

use crate::error::{FixError, Result};
use crate::models::Directive;
use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@+import\s+([^\n@]*)").expect("valid import pattern"));
static INJECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@+this\(([^\n@]*)\)").expect("valid injection pattern"));
static PARAMETERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@+(\([^\n@]*\))").expect("valid parameters pattern"));

/// Empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Extract every import fragment from `line`, returning the imports in
/// order of appearance and the line with those fragments removed.
pub fn extract_imports(line: &str) -> (Vec<Directive>, String) {
    let imports: Vec<Directive> = IMPORT_RE
        .captures_iter(line)
        .map(|caps| Directive::Import(caps[1].trim_end_matches('\r').to_string()))
        .collect();
    if imports.is_empty() {
        return (imports, line.to_string());
    }
    (imports, IMPORT_RE.replace_all(line, "").into_owned())
}

/// Extract an injector directive at the start of `line`.
pub fn extract_injection(line: &str) -> (Option<Directive>, String) {
    match INJECTION_RE.captures(line) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            (
                Some(Directive::Injection(caps[1].to_string())),
                line[end..].to_string(),
            )
        }
        None => (None, line.to_string()),
    }
}

/// Extract a parameter-list directive at the start of `line`.
pub fn extract_parameters(line: &str) -> (Option<Directive>, String) {
    match PARAMETERS_RE.captures(line) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            (
                Some(Directive::Parameters(caps[1].to_string())),
                line[end..].to_string(),
            )
        }
        None => (None, line.to_string()),
    }
}

/// Line terminator of the first terminated line; `\n` when there is none.
pub fn detect_eol<S: AsRef<str>>(lines: &[S]) -> &'static str {
    lines
        .iter()
        .find_map(|line| line.as_ref().strip_suffix('\n'))
        .map_or("\n", |line| if line.ends_with('\r') { "\r\n" } else { "\n" })
}

/// Accumulator threaded through the line scan.
#[derive(Debug, Default)]
struct Scan {
    imports: Vec<Directive>,
    injection: Option<Directive>,
    parameters: Option<Directive>,
    body: Vec<String>,
    /// Set by a line fully consumed by extraction; blank lines after it are dropped.
    after_header: bool,
}

impl Scan {
    fn step(mut self, line: &str) -> Self {
        let mut extracted = false;

        let (imports, rest) = extract_imports(line);
        extracted |= !imports.is_empty();
        self.imports.extend(imports);
        if is_blank(&rest) {
            return self.settle_blank(line, extracted);
        }

        let (injection, rest) = extract_injection(&rest);
        if injection.is_some() {
            self.injection = injection;
            extracted = true;
        }
        if is_blank(&rest) {
            return self.settle_blank(line, extracted);
        }

        let (parameters, rest) = extract_parameters(&rest);
        if parameters.is_some() {
            self.parameters = parameters;
            extracted = true;
        }
        if is_blank(&rest) {
            return self.settle_blank(line, extracted);
        }

        self.body.push(rest);
        self.after_header = false;
        self
    }

    fn settle_blank(mut self, line: &str, extracted: bool) -> Self {
        if extracted {
            self.after_header = true;
        } else if !self.after_header {
            self.body.push(line.to_string());
        }
        self
    }
}

/// Rewrite `lines` so the header directives come first in canonical order.
///
/// `identifier` names the source (usually the file path) in the error raised
/// when no parameter directive exists anywhere in the input.
pub fn reorder<S: AsRef<str>>(lines: &[S], identifier: &str) -> Result<Vec<String>> {
    let eol = detect_eol(lines);
    let scan = lines
        .iter()
        .fold(Scan::default(), |scan, line| scan.step(line.as_ref()));

    let Some(parameters) = scan.parameters else {
        return Err(FixError::MissingParameters {
            file: identifier.to_string(),
        });
    };

    let mut out = Vec::with_capacity(scan.imports.len() + scan.body.len() + 4);
    if !scan.imports.is_empty() {
        out.extend(scan.imports.iter().map(|import| import.render(eol)));
        out.push(eol.to_string());
    }
    if let Some(injection) = scan.injection {
        out.push(injection.render(eol));
    }
    out.push(parameters.render(eol));
    out.push(eol.to_string());
    out.extend(scan.body.into_iter().skip_while(|line| is_blank(line)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lines: &[&str]) -> Vec<String> {
        reorder(lines, "test.scala.html").unwrap()
    }

    #[test]
    fn test_scattered_header_is_reassembled() {
        let input = [
            "some body text\n",
            "@import foo.Bar\n",
            "@this(inject: Baz)\n",
            "@(a: Int)\n",
            "\n",
            "more body\n",
        ];
        assert_eq!(
            fix(&input),
            vec![
                "@import foo.Bar\n",
                "\n",
                "@this(inject: Baz)\n",
                "@(a: Int)\n",
                "\n",
                "some body text\n",
                "more body\n",
            ]
        );
    }

    #[test]
    fn test_no_imports_means_no_import_separator() {
        let out = fix(&["@(a: Int)\n", "<p>@a</p>\n"]);
        assert_eq!(out, vec!["@(a: Int)\n", "\n", "<p>@a</p>\n"]);
    }

    #[test]
    fn test_missing_parameters_fails_with_identifier() {
        let err = reorder(&["@import a.B\n", "<p>hi</p>\n"], "views/x.scala.html").unwrap_err();
        match err {
            FixError::MissingParameters { file } => assert_eq!(file, "views/x.scala.html"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            reorder::<&str>(&[], "empty"),
            Err(FixError::MissingParameters { .. })
        ));
    }

    #[test]
    fn test_imports_keep_relative_order_across_lines() {
        let out = fix(&[
            "@import z.Last @import a.First\n",
            "@(x: Int)\n",
            "body\n",
            "@import m.Middle\n",
        ]);
        assert_eq!(
            &out[..4],
            &["@import z.Last \n", "@import a.First\n", "@import m.Middle\n", "\n"]
        );
    }

    #[test]
    fn test_last_injection_and_parameters_win() {
        let out = fix(&[
            "@this(first: A)\n",
            "@(old: Int)\n",
            "@this(second: B)\n",
            "@(new: String)\n",
            "x\n",
        ]);
        assert_eq!(out, vec!["@this(second: B)\n", "@(new: String)\n", "\n", "x\n"]);
    }

    #[test]
    fn test_single_line_feeds_every_matcher() {
        let out = fix(&["@import a.B @this(c: C)\n", "@(p: Int)<div>\n", "</div>\n"]);
        assert_eq!(
            out,
            vec![
                "@import a.B \n",
                "\n",
                "@this(c: C)\n",
                "@(p: Int)\n",
                "\n",
                "<div>\n",
                "</div>\n",
            ]
        );
    }

    #[test]
    fn test_leading_body_blanks_stripped_inner_blanks_kept() {
        let out = fix(&["@(a: Int)\n", "\n", "\n", "first\n", "\n", "  \n", "second\n"]);
        assert_eq!(
            out,
            vec!["@(a: Int)\n", "\n", "first\n", "\n", "  \n", "second\n"]
        );
    }

    #[test]
    fn test_repeated_at_signs_collapse() {
        let out = fix(&["@@import a.B\n", "@@this(x: X)\n", "@@(y: Y)\n", "z\n"]);
        assert_eq!(
            out,
            vec!["@import a.B\n", "\n", "@this(x: X)\n", "@(y: Y)\n", "\n", "z\n"]
        );
    }

    #[test]
    fn test_injection_not_at_line_start_stays_in_body() {
        let out = fix(&["@(a: Int)\n", "<p> @this(x) </p>\n"]);
        assert_eq!(out, vec!["@(a: Int)\n", "\n", "<p> @this(x) </p>\n"]);
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        let input = [
            "@import a.B\n",
            "\n",
            "@this(c: C)\n",
            "@(d: D)\n",
            "\n",
            "<div>\n",
            "\n",
            "</div>",
        ];
        assert_eq!(fix(&input), input.to_vec());
    }

    #[test]
    fn test_reorder_is_idempotent() {
        let inputs: Vec<Vec<&str>> = vec![
            vec!["a\n", "@import x.Y\n", "\n", "@(p: P)\n", "b\n", "\n", "c\n"],
            vec!["\n", "@(p: P) text\n", "@import q.R\n", "\n", "\n", "tail"],
            vec!["@this(i: I) @import k.L\n", "@(p: P)\n"],
        ];
        for input in inputs {
            let once = fix(&input);
            let twice = reorder(once.as_slice(), "again").unwrap();
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn test_crlf_canonical_input_is_unchanged() {
        let input = ["@(a: Int)\r\n", "\r\n", "<p>@a</p>\r\n"];
        assert_eq!(fix(&input), input.to_vec());
    }

    #[test]
    fn test_crlf_header_keeps_crlf() {
        let out = fix(&["<p>@a</p>\r\n", "@import a.B\r\n", "@this(c: C)\r\n", "@(a: Int)\r\n"]);
        assert_eq!(
            out,
            vec![
                "@import a.B\r\n",
                "\r\n",
                "@this(c: C)\r\n",
                "@(a: Int)\r\n",
                "\r\n",
                "<p>@a</p>\r\n",
            ]
        );
    }

    #[test]
    fn test_detect_eol() {
        assert_eq!(detect_eol(&["a\r\n", "b\n"]), "\r\n");
        assert_eq!(detect_eol(&["a\n", "b\r\n"]), "\n");
        assert_eq!(detect_eol(&["no terminator"]), "\n");
        assert_eq!(detect_eol::<&str>(&[]), "\n");
    }

    #[test]
    fn test_extractors_leave_residual() {
        let (imports, rest) = extract_imports("<a>@import x.Y");
        assert_eq!(imports, vec![Directive::Import("x.Y".into())]);
        assert_eq!(rest, "<a>");

        let (inj, rest) = extract_injection("@this(a: A) tail\n");
        assert_eq!(inj, Some(Directive::Injection("a: A".into())));
        assert_eq!(rest, " tail\n");

        let (params, rest) = extract_parameters(" @(a: A)\n");
        assert!(params.is_none());
        assert_eq!(rest, " @(a: A)\n");
    }
}
