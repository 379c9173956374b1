//! twirlfix core library.
//!
//! Restores the canonical header order of Twirl (`.scala.html`) templates:
//! imports, a blank line, the injector, the parameter list, a blank line,
//! then the body.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `reorder`: Line classification and header reassembly.
//! - `discover`: Resolving a path argument to candidate template files.
//! - `fix`: Per-file driver (read, reorder, write, report).
//! - `diff`: Unified diff rendering.
//! - `models`: Directive and report data models.
//! - `output`: Human/JSON printers.
//! - `error`: Error type.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod diff;
pub mod discover;
pub mod error;
pub mod fix;
pub mod models;
pub mod output;
pub mod reorder;
pub mod utils;

pub use error::{FixError, Result};
