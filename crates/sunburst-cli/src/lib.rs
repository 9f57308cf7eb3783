//! CLI logic for the sunburst layout tool.
//!
//! Reads a CSV table of paths and values, lays it out as a sunburst, and
//! writes the resulting document.

pub mod error_adapter;
pub mod input;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use sunburst::{SunburstBuilder, SunburstError};

/// Run the sunburst CLI application
///
/// This function reads the input CSV, processes it through the sunburst
/// pipeline and writes the resulting document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SunburstError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - CSV errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SunburstError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing records"
    );

    // Load configuration, letting --format override the file
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        let render = app_config.render().clone().with_format(format);
        app_config = app_config.with_render(render);
    }
    debug!(format:% = app_config.render().format(); "Configuration resolved");

    let records = input::read_records(&args.input)?;

    let builder = SunburstBuilder::new(app_config);
    let mut root = builder.build_tree(&records);
    let report = builder.layout(&mut root)?;
    if report.has_warnings() {
        info!(
            zero_total_nodes = report.zero_total_nodes().len();
            "Some branches had a zero total and were split equally"
        );
    }
    let document = builder.render(&root)?;

    fs::write(&args.output, document)?;

    info!(output_file = args.output; "Generated {}", args.output);

    Ok(())
}
