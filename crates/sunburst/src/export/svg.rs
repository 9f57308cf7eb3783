//! Standalone SVG preview export.

use log::{debug, info};
use svg::{
    Document,
    node::element::{Circle, Group, Line, TSpan, Text},
};

use sunburst_core::{
    geometry::{Bounds, Size},
    tree::Node,
};

use super::{Error, Exporter, ensure_placed, node_caption, placed_position};
use crate::config::RenderConfig;

const FILL_COLOR: &str = "#dae8fc";
const STROKE_COLOR: &str = "#6c8ebf";
const EDGE_COLOR: &str = "#999999";
const FONT_SIZE: u32 = 12;

/// SVG exporter drawing the same picture as the draw.io document: edges
/// first, then a labeled circle per node on top of them.
#[derive(Debug, Clone)]
pub struct Svg {
    node_size: Size,
    margin: f64,
}

impl Svg {
    pub fn new(render: &RenderConfig) -> Self {
        Self {
            node_size: Size::square(render.node_size()),
            margin: 50.0,
        }
    }

    /// Bounds of every node shape, padded by the margin.
    fn content_bounds(&self, root: &Node) -> Result<Bounds, Error> {
        let mut bounds: Option<Bounds> = None;
        for node in root.iter() {
            let shape = placed_position(node)?.to_bounds(self.node_size);
            bounds = Some(match bounds {
                Some(acc) => acc.merge(&shape),
                None => shape,
            });
        }

        Ok(bounds.unwrap_or_default().add_padding(self.margin))
    }

    fn render_edges(&self, root: &Node) -> Result<Group, Error> {
        let mut group = Group::new()
            .set("stroke", EDGE_COLOR)
            .set("stroke-width", 1);

        for (parent, child) in root.edges() {
            let from = placed_position(parent)?;
            let to = placed_position(child)?;
            group = group.add(
                Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y()),
            );
        }

        Ok(group)
    }

    fn render_node(&self, node: &Node) -> Result<Group, Error> {
        let center = placed_position(node)?;

        let circle = Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", self.node_size.width() / 2.0)
            .set("fill", FILL_COLOR)
            .set("stroke", STROKE_COLOR);

        let caption = node_caption(node);
        let lines: Vec<&str> = caption.lines().collect();
        // Center the block of lines vertically on the node.
        let first_line_offset = -((lines.len() as f64 - 1.0) * f64::from(FONT_SIZE)) / 2.0;

        let mut text = Text::new("")
            .set("x", center.x())
            .set("y", center.y() + first_line_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", FONT_SIZE);
        for (index, line) in lines.into_iter().enumerate() {
            let dy = if index == 0 { 0 } else { FONT_SIZE };
            text = text.add(
                TSpan::new("")
                    .set("x", center.x())
                    .set("dy", dy)
                    .add(svg::node::Text::new(line)),
            );
        }

        Ok(Group::new()
            .set("id", node.id().to_string())
            .add(circle)
            .add(text))
    }

    fn render_document(&self, root: &Node) -> Result<Document, Error> {
        let bounds = self.content_bounds(root)?;

        let mut doc = Document::new()
            .set(
                "viewBox",
                (bounds.min_x(), bounds.min_y(), bounds.width(), bounds.height()),
            )
            .set("width", bounds.width())
            .set("height", bounds.height())
            .add(self.render_edges(root)?);

        for node in root.iter() {
            doc = doc.add(self.render_node(node)?);
        }

        Ok(doc)
    }
}

impl Exporter for Svg {
    fn export_tree(&self, root: &Node) -> Result<String, Error> {
        ensure_placed(root)?;

        let doc = self.render_document(root)?;
        debug!("SVG document rendered");

        let output = doc.to_string();
        info!(nodes = root.count(); "SVG export complete");
        Ok(output)
    }
}
