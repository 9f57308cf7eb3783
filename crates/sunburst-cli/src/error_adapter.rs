//! Error adapter for converting SunburstError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use sunburst::SunburstError;

/// Adapter giving a [`SunburstError`] a diagnostic code and, where one
/// exists, a help hint.
pub struct ErrorAdapter<'a>(pub &'a SunburstError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SunburstError::Io(_) => "sunburst::io",
            SunburstError::Csv(_) => "sunburst::csv",
            SunburstError::Config(_) => "sunburst::config",
            SunburstError::Layout(_) => "sunburst::layout",
            SunburstError::Export(_) => "sunburst::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SunburstError::Csv(_) => "the input must be a CSV file with a header row",
            SunburstError::Config(_) => {
                "check the [columns], [layout] and [render] sections of the configuration file"
            }
            SunburstError::Layout(_) => {
                "set layout.zero_total = \"equal_split\" to lay out zero-total branches"
            }
            SunburstError::Io(_) | SunburstError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
