//! Header directives recognized at the top of a Twirl template.

/// One extracted header directive. The payload is the captured text without
/// the leading `@` signs; `render` restores the canonical single-line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `@import <path>`; payload is everything after the whitespace.
    Import(String),
    /// `@this(<args>)`; payload is the text between the parentheses.
    Injection(String),
    /// `@(<params>)`; payload keeps its parentheses.
    Parameters(String),
}

impl Directive {
    /// Render as a full line terminated by `eol`.
    pub fn render(&self, eol: &str) -> String {
        match self {
            Directive::Import(path) => format!("@import {}{}", path, eol),
            Directive::Injection(args) => format!("@this({}){}", args, eol),
            Directive::Parameters(params) => format!("@{}{}", params, eol),
        }
    }
}
