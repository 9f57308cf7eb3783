//! Sunburst - radial tree layout for path/value records.
//!
//! Turns flat records carrying a `/`-separated hierarchical path and a
//! numeric weight into a tree, places every node on concentric rings around
//! a canvas center, and exports the result as a draw.io document or an SVG
//! preview.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`structure::TreeBuilder`] folds records into a tree of unique labels.
//! 2. [`structure::aggregate`] sums leaf weights up to every ancestor.
//! 3. [`layout::RadialEngine`] assigns each node an angular span and position.
//! 4. An [`export::Exporter`] serializes the placed tree.
//!
//! [`SunburstBuilder`] drives all four with one [`config::AppConfig`].

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use sunburst_core::{geometry, identifier, record, tree};

pub use error::SunburstError;

use log::{debug, info, trace};

use config::{AppConfig, OutputFormat};
use export::Exporter;
use layout::{LayoutReport, RadialEngine};
use record::Record;
use structure::{ColumnResolver, TreeBuilder};
use tree::Node;

/// Builder for turning records into a laid-out sunburst document.
///
/// # Examples
///
/// ```rust
/// use sunburst::{SunburstBuilder, config::AppConfig, record::Record};
///
/// let records = vec![
///     Record::from_pairs([("Path", "A/B"), ("Value", "10")]),
///     Record::from_pairs([("Path", "A/C"), ("Value", "30")]),
/// ];
///
/// let builder = SunburstBuilder::new(AppConfig::default());
/// let document = builder.process(&records).expect("Failed to process");
/// assert!(document.contains("Sunburst Auto-Layout"));
///
/// // Or use default config
/// let builder = SunburstBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct SunburstBuilder {
    config: AppConfig,
}

impl SunburstBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Column, layout, and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build and aggregate the tree for `records`.
    ///
    /// Records without a usable path are skipped; missing or unparseable
    /// values count as weight 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sunburst::{SunburstBuilder, record::Record};
    ///
    /// let records = vec![
    ///     Record::from_pairs([("Path", "A/B"), ("Value", "10")]),
    ///     Record::from_pairs([("Path", "A/B"), ("Value", "5")]),
    /// ];
    ///
    /// let root = SunburstBuilder::default().build_tree(&records);
    /// assert_eq!(root.find(&["A", "B"]).map(|node| node.value()), Some(15.0));
    /// assert_eq!(root.value(), 15.0);
    /// ```
    pub fn build_tree(&self, records: &[Record]) -> Node {
        info!(records = records.len(); "Building tree");

        let builder = TreeBuilder::new(ColumnResolver::new(self.config.columns()));
        let mut root = builder.build(records);
        let total = structure::aggregate(&mut root);

        debug!(total, nodes = root.count(); "Tree aggregated");
        root
    }

    /// Place every node of an aggregated tree.
    ///
    /// # Errors
    ///
    /// Returns [`SunburstError::Config`] if the configuration is invalid, or
    /// [`SunburstError::Layout`] if the tree cannot be laid out.
    pub fn layout(&self, root: &mut Node) -> Result<LayoutReport, SunburstError> {
        self.config.validate()?;

        RadialEngine::new(self.config.layout()).layout(root)
    }

    /// Serialize a placed tree in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`SunburstError::Export`] if a node is unplaced or the
    /// document cannot be written.
    pub fn render(&self, root: &Node) -> Result<String, SunburstError> {
        let format = self.config.render().format();
        info!(format:% = format; "Rendering document");

        let document = match format {
            OutputFormat::Drawio => {
                export::drawio::Drawio::new(self.config.render(), self.config.layout())
                    .export_tree(root)?
            }
            OutputFormat::Svg => export::svg::Svg::new(self.config.render()).export_tree(root)?,
        };

        trace!(bytes = document.len(); "Document rendered");
        Ok(document)
    }

    /// Run the whole pipeline: build, aggregate, lay out, and render.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::layout`] or [`Self::render`].
    pub fn process(&self, records: &[Record]) -> Result<String, SunburstError> {
        let mut root = self.build_tree(records);
        self.layout(&mut root)?;
        self.render(&root)
    }
}
