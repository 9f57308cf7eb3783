//! Export of laid-out trees.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a placed tree into a document. It is the final stage in the
//! processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Records
//!     ↓ structure
//! Aggregated tree
//!     ↓ layout
//! Placed tree
//!     ↓ export (this module)
//! Document
//! ```
//!
//! # Available Backends
//!
//! - [`drawio`] — draw.io `mxfile` documents via [`drawio::Drawio`]
//! - [`svg`] — standalone SVG previews via [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. A tree with an unplaced node or a
//! non-finite coordinate is refused as a whole; no partial document is
//! produced. [`Error`] converts into [`SunburstError::Export`] at the crate
//! boundary.
//!
//! [`SunburstError::Export`]: crate::SunburstError::Export

pub mod drawio;
pub mod svg;

use sunburst_core::{geometry::Point, tree::Node};

/// Abstraction for document export backends.
pub trait Exporter {
    /// Serializes a placed tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the tree is not fully placed or the
    /// document cannot be produced.
    fn export_tree(&self, root: &Node) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Returns the position of `node`, refusing unplaced or non-finite nodes.
fn placed_position(node: &Node) -> Result<Point, Error> {
    let placement = node.placement().ok_or_else(|| {
        Error::Render(format!(
            "node `{}` ({}) has not been laid out",
            node.label(),
            node.id()
        ))
    })?;

    let position = placement.position();
    if !position.is_finite() {
        return Err(Error::Render(format!(
            "node `{}` ({}) has a non-finite position ({}, {})",
            node.label(),
            node.id(),
            position.x(),
            position.y()
        )));
    }

    Ok(position)
}

/// Checks every node of `root` before any output is written.
fn ensure_placed(root: &Node) -> Result<(), Error> {
    root.iter().try_for_each(|node| placed_position(node).map(|_| ()))
}

/// Text shown for a node: its label and its value on a second line.
fn node_caption(node: &Node) -> String {
    format!("{}\n({})", node.label(), node.value())
}
