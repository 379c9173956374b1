//! Message prefixes for stderr diagnostics, colored when stderr is a terminal.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".blue().bold().to_string()
    } else {
        "note:".to_string()
    }
}
