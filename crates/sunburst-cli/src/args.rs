//! Command-line argument definitions for the sunburst CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output format, and logging verbosity.

use clap::Parser;

use sunburst::config::OutputFormat;

/// Command-line arguments for the sunburst layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file (with a header row)
    #[arg(short, long)]
    pub input: String,

    /// Path to the output document
    #[arg(short, long, default_value = "sunburst_layout.drawio")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (drawio, svg); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
