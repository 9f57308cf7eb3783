//! Error types for sunburst operations.
//!
//! This module provides the main error type [`SunburstError`] which wraps
//! the error conditions that can occur while turning records into a
//! rendered document.

use std::io;

use thiserror::Error;

/// The main error type for sunburst operations.
///
/// Data-quality issues in the records themselves (missing paths, unparseable
/// values) are not errors; they are absorbed by the tree builder.
#[derive(Debug, Error)]
pub enum SunburstError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SunburstError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
