//! CLI argument parsing via `clap`.

use crate::config::OUTPUT_MODES;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "twirlfix",
    version,
    about = "Fix Twirl template headers reordered by IDE refactors",
    long_about = "Find and fix twirl templates that were messed up by IntelliJ refactoring and code format.\nRun with '--dry' first to see changes.\n\nPrints diffs of all changes made to stdout.\n\nConfiguration precedence: CLI > twirlfix.toml > defaults.",
    after_help = "Examples:\n  twirlfix --dry\n  twirlfix app/views\n  twirlfix app/views/index.scala.html\n  twirlfix --check --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "File or directory, defaults to current working dir")]
    pub file: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_dry", help = "Do not write changes, only output diff")]
    pub dry: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "dry", help = "Write changes even if the config sets dry = true")]
    pub no_dry: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_check", help = "Exit non-zero if changes would occur (implies --dry)")]
    pub check: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "check", help = "Disable check mode set in the config")]
    pub no_check: bool,
    #[arg(long, value_parser = OUTPUT_MODES, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

impl Cli {
    /// Flags as config overrides: `None` when neither form was passed.
    pub fn dry_override(&self) -> Option<bool> {
        flag_override(self.dry, self.no_dry)
    }

    pub fn check_override(&self) -> Option<bool> {
        flag_override(self.check, self.no_check)
    }
}

fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
