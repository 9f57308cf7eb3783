//! Configuration types for sunburst layout and rendering.
//!
//! This module provides configuration structures that control how records
//! are read, how the tree is laid out and how it is rendered. All types
//! implement [`serde::Deserialize`] and every field has a default, so a
//! configuration file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`ColumnConfig`] - Which record columns hold the path and the value.
//! - [`LayoutConfig`] - Ring spacing, canvas offset, angular range and the
//!   [`ZeroTotalPolicy`].
//! - [`RenderConfig`] - Node size and [`OutputFormat`].
//!
//! # Example
//!
//! ```
//! # use sunburst::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().ring_spacing(), 160.0);
//! assert!(config.validate().is_ok());
//! ```

use std::{
    f64::consts::TAU,
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

use crate::SunburstError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Column resolution section.
    #[serde(default)]
    columns: ColumnConfig,

    /// Layout section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Rendering section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(columns: ColumnConfig, layout: LayoutConfig, render: RenderConfig) -> Self {
        Self {
            columns,
            layout,
            render,
        }
    }

    /// Returns the column configuration.
    pub fn columns(&self) -> &ColumnConfig {
        &self.columns
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Replaces the render section.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Checks that the numeric settings describe a drawable layout.
    ///
    /// # Errors
    ///
    /// Returns [`SunburstError::Config`] naming the first offending setting.
    pub fn validate(&self) -> Result<(), SunburstError> {
        let layout = &self.layout;

        if !(layout.ring_spacing.is_finite() && layout.ring_spacing > 0.0) {
            return Err(SunburstError::Config(format!(
                "layout.ring_spacing must be a positive number, got {}",
                layout.ring_spacing
            )));
        }
        if !layout.canvas_offset.is_finite() {
            return Err(SunburstError::Config(format!(
                "layout.canvas_offset must be finite, got {}",
                layout.canvas_offset
            )));
        }
        if !(layout.start_angle.is_finite() && layout.end_angle.is_finite()) {
            return Err(SunburstError::Config(
                "layout.start_angle and layout.end_angle must be finite".to_string(),
            ));
        }
        if layout.end_angle <= layout.start_angle {
            return Err(SunburstError::Config(format!(
                "layout.end_angle ({}) must be greater than layout.start_angle ({})",
                layout.end_angle, layout.start_angle
            )));
        }
        if !(self.render.node_size.is_finite() && self.render.node_size > 0.0) {
            return Err(SunburstError::Config(format!(
                "render.node_size must be a positive number, got {}",
                self.render.node_size
            )));
        }

        Ok(())
    }
}

/// Which record columns carry the path and the value.
///
/// A column is looked up by name first, ignoring ASCII case. When no column
/// has that name, the column at the fallback index (in header order) is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Name of the path column.
    path: String,

    /// Name of the value column.
    value: String,

    /// Position of the path column when no column is named [`Self::path`].
    path_index: usize,

    /// Position of the value column when no column is named [`Self::value`].
    value_index: usize,
}

impl ColumnConfig {
    /// Creates a new [`ColumnConfig`].
    ///
    /// # Arguments
    ///
    /// * `path` - Name of the path column, matched case-insensitively.
    /// * `value` - Name of the value column, matched case-insensitively.
    /// * `path_index` - Fallback position of the path column.
    /// * `value_index` - Fallback position of the value column.
    pub fn new(
        path: impl Into<String>,
        value: impl Into<String>,
        path_index: usize,
        value_index: usize,
    ) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            path_index,
            value_index,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn path_index(&self) -> usize {
        self.path_index
    }

    pub fn value_index(&self) -> usize {
        self.value_index
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self::new("path", "value", 0, 1)
    }
}

/// What the layout does with a node whose aggregated value is zero but
/// which still has children to distribute its span to.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTotalPolicy {
    /// Give every child an equal share and report a warning (default)
    #[default]
    EqualSplit,
    /// Abort the layout with an error naming the node
    Reject,
}

impl FromStr for ZeroTotalPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal_split" => Ok(Self::EqualSplit),
            "reject" => Ok(Self::Reject),
            _ => Err("Unsupported zero total policy"),
        }
    }
}

impl From<ZeroTotalPolicy> for &'static str {
    fn from(val: ZeroTotalPolicy) -> Self {
        match val {
            ZeroTotalPolicy::EqualSplit => "equal_split",
            ZeroTotalPolicy::Reject => "reject",
        }
    }
}

impl Display for ZeroTotalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Radial layout settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between successive depth rings.
    ring_spacing: f64,

    /// Translation applied to both axes so the diagram stays on a positive canvas.
    canvas_offset: f64,

    /// Start of the angular range, in radians.
    start_angle: f64,

    /// End of the angular range, in radians.
    end_angle: f64,

    /// Handling of zero-valued parents.
    zero_total: ZeroTotalPolicy,
}

impl LayoutConfig {
    /// Creates a layout configuration covering the full circle.
    ///
    /// # Arguments
    ///
    /// * `ring_spacing` - Distance between successive depth levels.
    /// * `canvas_offset` - Canvas coordinates of the center on both axes.
    pub fn new(ring_spacing: f64, canvas_offset: f64) -> Self {
        Self {
            ring_spacing,
            canvas_offset,
            ..Self::default()
        }
    }

    /// Restricts the layout to `[start_angle, end_angle)` radians.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Sets the [`ZeroTotalPolicy`].
    pub fn with_zero_total(mut self, zero_total: ZeroTotalPolicy) -> Self {
        self.zero_total = zero_total;
        self
    }

    pub fn ring_spacing(&self) -> f64 {
        self.ring_spacing
    }

    pub fn canvas_offset(&self) -> f64 {
        self.canvas_offset
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn zero_total(&self) -> ZeroTotalPolicy {
        self.zero_total
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ring_spacing: 160.0,
            canvas_offset: 2000.0,
            start_angle: 0.0,
            end_angle: TAU,
            zero_total: ZeroTotalPolicy::default(),
        }
    }
}

/// Output document formats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// draw.io `mxfile` document (default)
    #[default]
    Drawio,
    /// Standalone SVG preview
    Svg,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drawio" => Ok(Self::Drawio),
            "svg" => Ok(Self::Svg),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Drawio => "drawio",
            OutputFormat::Svg => "svg",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Rendering settings shared by all exporters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Diameter of the circle drawn for each node.
    node_size: f64,

    /// Document format produced by [`crate::SunburstBuilder::render`].
    format: OutputFormat,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(node_size: f64, format: OutputFormat) -> Self {
        Self { node_size, format }
    }

    /// Sets the [`OutputFormat`].
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn node_size(&self) -> f64 {
        self.node_size
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(80.0, OutputFormat::default())
    }
}
