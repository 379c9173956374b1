//! Configuration discovery and effective settings resolution.
//!
//! twirlfix reads `twirlfix.toml|yaml|yml` from the working directory (or
//! the closest ancestor holding one, stopping at a `.git` boundary) and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `suffix`: `.scala.html`
//! - `output`: `human`
//! - `dry|check`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::discover::DEFAULT_SUFFIX;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TOML: &str = "twirlfix.toml";
const CONFIG_YAML: [&str; 2] = ["twirlfix.yaml", "twirlfix.yml"];

/// Accepted values for `output`, on the CLI and in the config file.
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `twirlfix.toml|yaml`.
pub struct TwirlfixConfig {
    pub suffix: Option<String>,
    pub output: Option<String>,
    pub dry: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    /// Directory the config was looked up in.
    pub config_root: PathBuf,
    pub config_found: bool,
    pub file: Option<PathBuf>,
    pub suffix: String,
    pub output: String,
    pub dry: bool,
    pub check: bool,
}

fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_TOML).exists() || CONFIG_YAML.iter().any(|name| dir.join(name).exists())
}

/// Walk upward from `start` to find the directory holding the config.
///
/// Stops at the first directory with a config file or a `.git` entry; falls
/// back to `start` when neither is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let mut cur = start.as_path();
    loop {
        if has_config(cur) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.clone(),
        }
    }
}

/// Load `TwirlfixConfig` from `twirlfix.toml` or `twirlfix.yaml|yml` if present.
///
/// A config that fails to parse is reported and ignored.
pub fn load_config(root: &Path) -> Option<TwirlfixConfig> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        return match toml::from_str::<TwirlfixConfig>(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::warn!("ignoring invalid {}: {}", toml_path.display(), e);
                None
            }
        };
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            return match serde_yaml::from_str::<TwirlfixConfig>(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    log::warn!("ignoring invalid {}: {}", p.display(), e);
                    None
                }
            };
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `start` is where config discovery begins (the working directory for the
/// binary). Boolean flags are `None` when not given on the command line.
pub fn resolve_effective(
    start: &Path,
    cli_file: Option<&str>,
    cli_dry: Option<bool>,
    cli_check: Option<bool>,
    cli_output: Option<&str>,
) -> Effective {
    let config_root = detect_config_root(start);
    let loaded = load_config(&config_root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let suffix = cfg
        .suffix
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let output = if OUTPUT_MODES.contains(&output.as_str()) {
        output
    } else {
        log::warn!(
            "unknown output mode {:?} (expected one of {}); using human",
            output,
            OUTPUT_MODES.join("|")
        );
        "human".to_string()
    };
    let dry = cli_dry.or(cfg.dry).unwrap_or(false);
    let check = cli_check.or(cfg.check).unwrap_or(false);

    Effective {
        config_root,
        config_found,
        file: cli_file.map(PathBuf::from),
        suffix,
        output,
        dry,
        check,
    }
}
