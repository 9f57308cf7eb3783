//! draw.io (`mxfile`) export.
//!
//! Produces an uncompressed draw.io document: one ellipse vertex per node,
//! centered on the node's position, and one plain connector per
//! parent-child edge. Cells are written in pre-order, each node's vertex
//! followed by the edge to its parent.

use std::borrow::Cow;

use log::{debug, info};
use quick_xml::{
    Writer,
    escape::escape,
    events::{BytesDecl, BytesEnd, BytesStart, Event, attributes::Attribute},
    name::QName,
};

use sunburst_core::{geometry::Size, identifier::NodeId, tree::Node};

use super::{Error, Exporter, ensure_placed, node_caption, placed_position};
use crate::config::{LayoutConfig, RenderConfig};

const VERTEX_STYLE: &str =
    "ellipse;whiteSpace=wrap;html=1;aspect=fixed;fillColor=#dae8fc;strokeColor=#6c8ebf;";
const EDGE_STYLE: &str = "edgeStyle=none;html=1;endArrow=none;strokeColor=#999999;";

/// Cell every shape is parented to.
const LAYER_CELL_ID: &str = "1";

/// draw.io exporter.
///
/// # Examples
///
/// ```
/// use sunburst::{
///     config::{LayoutConfig, RenderConfig},
///     export::{Exporter, drawio::Drawio},
///     layout::RadialEngine,
/// };
/// use sunburst_core::tree::Node;
///
/// let mut root = Node::root();
/// RadialEngine::new(&LayoutConfig::default()).layout(&mut root).unwrap();
///
/// let exporter = Drawio::new(&RenderConfig::default(), &LayoutConfig::default());
/// let xml = exporter.export_tree(&root).unwrap();
/// assert!(xml.contains(r#"<mxCell id="root""#));
/// ```
#[derive(Debug, Clone)]
pub struct Drawio {
    node_size: Size,
    page_size: f64,
}

impl Drawio {
    /// Creates an exporter drawing nodes at the configured size on a page
    /// twice the canvas offset wide, so the layout center is the page center.
    pub fn new(render: &RenderConfig, layout: &LayoutConfig) -> Self {
        Self {
            node_size: Size::square(render.node_size()),
            page_size: layout.canvas_offset() * 2.0,
        }
    }

    fn write_document(&self, root: &Node) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        let page = self.page_size.to_string();

        write(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write(
            &mut writer,
            Event::Start(
                BytesStart::new("mxfile")
                    .with_attributes([("host", "Electron"), ("agent", "SunburstCLI")]),
            ),
        )?;
        write(
            &mut writer,
            Event::Start(
                BytesStart::new("diagram")
                    .with_attributes([("id", "diagram_1"), ("name", "Sunburst Auto-Layout")]),
            ),
        )?;
        write(
            &mut writer,
            Event::Start(BytesStart::new("mxGraphModel").with_attributes([
                ("dx", page.as_str()),
                ("dy", page.as_str()),
                ("grid", "1"),
                ("gridSize", "10"),
                ("guides", "1"),
                ("tooltips", "1"),
                ("connect", "1"),
                ("arrows", "1"),
                ("fold", "1"),
                ("page", "1"),
                ("pageScale", "1"),
                ("pageWidth", page.as_str()),
                ("pageHeight", page.as_str()),
                ("math", "0"),
                ("shadow", "0"),
            ])),
        )?;
        write(&mut writer, Event::Start(BytesStart::new("root")))?;

        write(
            &mut writer,
            Event::Empty(BytesStart::new("mxCell").with_attributes([("id", "0")])),
        )?;
        write(
            &mut writer,
            Event::Empty(
                BytesStart::new("mxCell").with_attributes([("id", LAYER_CELL_ID), ("parent", "0")]),
            ),
        )?;

        self.write_subtree(&mut writer, root, None)?;

        for name in ["root", "mxGraphModel", "diagram", "mxfile"] {
            write(&mut writer, Event::End(BytesEnd::new(name)))?;
        }

        Ok(writer.into_inner())
    }

    fn write_subtree(
        &self,
        writer: &mut Writer<Vec<u8>>,
        node: &Node,
        parent: Option<NodeId>,
    ) -> Result<(), Error> {
        self.write_vertex(writer, node)?;
        if let Some(parent) = parent {
            self.write_edge(writer, parent, node.id())?;
        }
        node.children()
            .try_for_each(|child| self.write_subtree(writer, child, Some(node.id())))
    }

    fn write_vertex(&self, writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), Error> {
        let id = node.id().to_string();
        let top_left = placed_position(node)?.to_bounds(self.node_size).min_point();
        let (x, y) = (top_left.x().to_string(), top_left.y().to_string());
        let (width, height) = (
            self.node_size.width().to_string(),
            self.node_size.height().to_string(),
        );

        let mut cell = BytesStart::new("mxCell");
        cell.push_attribute(("id", id.as_str()));
        cell.push_attribute(multiline_attribute("value", &node_caption(node)));
        cell.extend_attributes([
            ("style", VERTEX_STYLE),
            ("parent", LAYER_CELL_ID),
            ("vertex", "1"),
        ]);

        write(writer, Event::Start(cell))?;
        write(
            writer,
            Event::Empty(BytesStart::new("mxGeometry").with_attributes([
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("as", "geometry"),
            ])),
        )?;
        write(writer, Event::End(BytesEnd::new("mxCell")))
    }

    fn write_edge(
        &self,
        writer: &mut Writer<Vec<u8>>,
        parent: NodeId,
        child: NodeId,
    ) -> Result<(), Error> {
        let id = format!("edge_{child}");
        let source = parent.to_string();
        let target = child.to_string();

        write(
            writer,
            Event::Start(BytesStart::new("mxCell").with_attributes([
                ("id", id.as_str()),
                ("style", EDGE_STYLE),
                ("parent", LAYER_CELL_ID),
                ("source", source.as_str()),
                ("target", target.as_str()),
                ("edge", "1"),
            ])),
        )?;
        write(
            writer,
            Event::Empty(
                BytesStart::new("mxGeometry").with_attributes([("relative", "1"), ("as", "geometry")]),
            ),
        )?;
        write(writer, Event::End(BytesEnd::new("mxCell")))
    }
}

impl Exporter for Drawio {
    fn export_tree(&self, root: &Node) -> Result<String, Error> {
        ensure_placed(root)?;

        let bytes = self.write_document(root)?;
        debug!(bytes = bytes.len(); "draw.io document rendered");

        let document = String::from_utf8(bytes)
            .map_err(|err| Error::Render(format!("document is not valid UTF-8: {err}")))?;

        info!(nodes = root.count(); "draw.io export complete");
        Ok(document)
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|err| Error::Render(format!("failed to write XML: {err}")))
}

/// Builds an escaped attribute whose line breaks survive attribute-value
/// normalization.
fn multiline_attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let escaped = escape(value).replace('\n', "&#10;");
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    }
}
