//! sunburst CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use sunburst_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = log_level_filter(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting sunburst");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = sunburst_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &ErrorAdapter(&err))
            .expect("Writing to String buffer is infallible");

        error!("{writer}");
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Parses `--log-level`; unknown names fall back to warn.
fn log_level_filter(raw: &str) -> LevelFilter {
    LevelFilter::from_str(raw).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{raw}`, falling back to warn");
        LevelFilter::Warn
    })
}
