//! twirlfix CLI binary entry point.
//! Resolves settings, runs the fixer and prints diffs or a JSON report.

use clap::Parser;
use std::path::Path;
use twirlfix::cli::Cli;
use twirlfix::discover;
use twirlfix::fix::{self, FixOptions};
use twirlfix::models::Summary;
use twirlfix::{config, output, utils};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let cwd = Path::new(".");
    let eff = config::resolve_effective(
        cwd,
        cli.file.as_deref(),
        cli.dry_override(),
        cli.check_override(),
        cli.output.as_deref(),
    );
    if eff.config_found {
        log::debug!("using config from {}", eff.config_root.display());
    }

    let target = discover::resolve_target(eff.file.as_deref(), cwd);
    // --check never writes
    let opts = FixOptions {
        dry: eff.dry || eff.check,
        suffix: eff.suffix.clone(),
    };
    let json = eff.output == "json";
    let color = output::use_colors(&eff.output);

    let mut reports = Vec::new();
    let result = fix::run_fix(&target, &opts, |report| {
        if json {
            reports.push(report.clone());
        } else {
            output::print_human(report, color);
        }
    });

    match result {
        Ok(summary) => {
            if json {
                output::print_json(&reports, &summary, None);
            }
            if eff.check && summary.changed > 0 {
                eprintln!(
                    "{} {} of {} template(s) need reordering",
                    utils::note_prefix(),
                    summary.changed,
                    summary.total
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            if json {
                // Files before the failure may already be rewritten.
                let mut partial = Summary::default();
                for report in &reports {
                    partial.record(report);
                }
                output::print_json(&reports, &partial, Some(e.to_string().as_str()));
            }
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    }
}
