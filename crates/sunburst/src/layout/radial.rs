//! Proportional angular partitioning.

use log::{debug, info, trace, warn};

use sunburst_core::{
    geometry::{AngularSpan, Point},
    identifier::NodeId,
    tree::{Node, Placement},
};

use crate::{
    SunburstError,
    config::{LayoutConfig, ZeroTotalPolicy},
};

/// Outcome of a layout run.
///
/// Layout never fails on data-quality issues under
/// [`ZeroTotalPolicy::EqualSplit`]; the nodes whose children had to be split
/// equally are listed here instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutReport {
    placed: usize,
    zero_total_nodes: Vec<NodeId>,
}

impl LayoutReport {
    /// Number of nodes that received a placement
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Nodes with children whose total was zero (or not finite)
    pub fn zero_total_nodes(&self) -> &[NodeId] {
        &self.zero_total_nodes
    }

    /// Returns `true` if any data-quality warning was raised
    pub fn has_warnings(&self) -> bool {
        !self.zero_total_nodes.is_empty()
    }
}

/// Sunburst layout engine.
///
/// Places each node at radius `level × ring_spacing` from the canvas center,
/// at the mid-angle of its interval. A node's interval is split among its
/// children in proportion to their values, in child order, each child
/// starting where the previous one ended. Parents are always placed before
/// their children.
///
/// The engine expects an aggregated tree (see
/// [`aggregate`](crate::structure::aggregate)) and a validated
/// [`LayoutConfig`].
#[derive(Debug, Clone)]
pub struct RadialEngine {
    center: Point,
    ring_spacing: f64,
    span: AngularSpan,
    zero_total: ZeroTotalPolicy,
}

impl RadialEngine {
    pub fn new(config: &LayoutConfig) -> Self {
        let offset = config.canvas_offset();
        Self {
            center: Point::new(offset, offset),
            ring_spacing: config.ring_spacing(),
            span: AngularSpan::new(config.start_angle(), config.end_angle()),
            zero_total: config.zero_total(),
        }
    }

    /// Assigns a placement to every node of `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SunburstError::Layout`] if the tree was already laid out, or
    /// if a zero-total parent is found under [`ZeroTotalPolicy::Reject`]. In
    /// both cases no node is modified.
    pub fn layout(&self, root: &mut Node) -> Result<LayoutReport, SunburstError> {
        if root.placement().is_some() {
            return Err(SunburstError::Layout(
                "tree has already been laid out".to_string(),
            ));
        }

        if self.zero_total == ZeroTotalPolicy::Reject {
            if let Some(node) = root.iter().find(|node| needs_equal_split(node)) {
                return Err(SunburstError::Layout(format!(
                    "node `{}` ({}) has children but a total value of {}",
                    node.label(),
                    node.id(),
                    node.value()
                )));
            }
        }

        debug!(
            start_angle = self.span.start(),
            end_angle = self.span.end(),
            ring_spacing = self.ring_spacing;
            "Laying out tree"
        );

        let mut report = LayoutReport::default();
        self.place_subtree(root, self.span, &mut report);

        info!(
            placed = report.placed(),
            zero_total_nodes = report.zero_total_nodes().len();
            "Layout calculated"
        );

        Ok(report)
    }

    fn place_subtree(&self, node: &mut Node, span: AngularSpan, report: &mut LayoutReport) {
        let radius = node.level() as f64 * self.ring_spacing;
        let position = Point::from_polar(self.center, radius, span.mid());
        node.place(Placement::new(position, span));
        report.placed += 1;

        trace!(
            node_id:% = node.id(),
            x = position.x(),
            y = position.y(),
            start = span.start(),
            end = span.end();
            "Node placed"
        );

        if node.is_leaf() {
            return;
        }

        let total = node.value();
        let equal_split = needs_equal_split(node);
        if equal_split {
            warn!(
                node_id:% = node.id(),
                label = node.label(),
                total;
                "Children of a zero-total node get equal shares"
            );
            report.zero_total_nodes.push(node.id());
        }

        let count = node.children_count() as f64;
        let mut cursor = span.start();
        for child in node.children_mut() {
            let fraction = if equal_split {
                1.0 / count
            } else {
                child.value() / total
            };
            let child_span = span.take(cursor, fraction);
            cursor = child_span.end();
            self.place_subtree(child, child_span, report);
        }
    }
}

/// A parent whose total cannot be divided proportionally.
fn needs_equal_split(node: &Node) -> bool {
    let total = node.value();
    !node.is_leaf() && !(total.is_finite() && total > 0.0)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    use float_cmp::assert_approx_eq;
    use sunburst_core::record::Record;

    use super::*;
    use crate::structure::{TreeBuilder, aggregate};

    fn tree(entries: &[(&str, &str)]) -> Node {
        let records: Vec<Record> = entries
            .iter()
            .map(|(path, value)| Record::from_pairs([("Path", *path), ("Value", *value)]))
            .collect();
        let mut root = TreeBuilder::default().build(&records);
        aggregate(&mut root);
        root
    }

    fn span_of(root: &Node, path: &[&str]) -> AngularSpan {
        root.find(path)
            .and_then(Node::placement)
            .map(Placement::span)
            .expect("node is placed")
    }

    #[test]
    fn test_two_children_example() {
        let mut root = tree(&[("A/B", "10"), ("A/C", "30")]);
        let report = RadialEngine::new(&LayoutConfig::default())
            .layout(&mut root)
            .expect("layout succeeds");

        assert_eq!(report.placed(), 4);
        assert!(!report.has_warnings());
        assert_eq!(root.value(), 40.0);

        let a = span_of(&root, &["A"]);
        assert_approx_eq!(f64, a.start(), 0.0);
        assert_approx_eq!(f64, a.end(), TAU);

        let b = span_of(&root, &["A", "B"]);
        assert_approx_eq!(f64, b.start(), 0.0);
        assert_approx_eq!(f64, b.width(), FRAC_PI_2);

        let c = span_of(&root, &["A", "C"]);
        assert_approx_eq!(f64, c.start(), FRAC_PI_2);
        assert_approx_eq!(f64, c.width(), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn test_positions() {
        let mut root = tree(&[("A/B", "10"), ("A/C", "30")]);
        RadialEngine::new(&LayoutConfig::default())
            .layout(&mut root)
            .expect("layout succeeds");

        // Root sits exactly on the canvas center
        assert_eq!(root.x(), Some(2000.0));
        assert_eq!(root.y(), Some(2000.0));

        // A: radius 160 at mid-angle π
        let a = root.child("A").expect("A exists");
        assert_approx_eq!(f64, a.x().unwrap_or_default(), 1840.0);
        assert_approx_eq!(f64, a.y().unwrap_or_default(), 2000.0, epsilon = 1e-9);

        // B: radius 320 at mid-angle π/4
        let b = root.find(&["A", "B"]).expect("B exists");
        let expected = 2000.0 + 320.0 * FRAC_PI_4.cos();
        assert_approx_eq!(f64, b.x().unwrap_or_default(), expected, epsilon = 1e-9);
        assert_approx_eq!(f64, b.y().unwrap_or_default(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_custom_config() {
        let mut root = tree(&[("A", "1"), ("B", "1")]);
        let config = LayoutConfig::new(100.0, 500.0).with_angles(0.0, PI);
        RadialEngine::new(&config)
            .layout(&mut root)
            .expect("layout succeeds");

        assert_eq!(root.x(), Some(500.0));
        let a = root.child("A").expect("A exists");
        let a_span = a.placement().map(Placement::span).expect("placed");
        assert_approx_eq!(f64, a_span.end(), FRAC_PI_2);
        // A at radius 100, angle π/4
        assert_approx_eq!(
            f64,
            a.x().unwrap_or_default(),
            500.0 + 100.0 * FRAC_PI_4.cos(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_child_gets_empty_span() {
        let mut root = tree(&[("A", "0"), ("B", "2")]);
        let report = RadialEngine::new(&LayoutConfig::default())
            .layout(&mut root)
            .expect("layout succeeds");

        assert!(!report.has_warnings());
        assert_approx_eq!(f64, span_of(&root, &["A"]).width(), 0.0);
        assert_approx_eq!(f64, span_of(&root, &["B"]).width(), TAU);
    }

    #[test]
    fn test_zero_total_equal_split() {
        let mut root = tree(&[("Z/a", "0"), ("Z/b", "0"), ("Z/c", "0"), ("Y", "3")]);
        let report = RadialEngine::new(&LayoutConfig::default())
            .layout(&mut root)
            .expect("layout succeeds");

        let z = root.child("Z").expect("Z exists");
        assert_eq!(report.zero_total_nodes(), &[z.id()]);
        assert!(report.has_warnings());

        // Z got nothing from the root, its children share that empty span
        for node in root.iter() {
            let placement = node.placement().expect("placed");
            assert!(placement.position().is_finite(), "{} not finite", node.label());
        }

        let mut root = tree(&[("Z/a", "0"), ("Z/b", "0")]);
        RadialEngine::new(&LayoutConfig::default())
            .layout(&mut root)
            .expect("layout succeeds");
        // Root and Z are both zero-total, so every split is equal
        assert_approx_eq!(f64, span_of(&root, &["Z", "a"]).width(), PI);
        assert_approx_eq!(f64, span_of(&root, &["Z", "b"]).start(), PI);
    }

    #[test]
    fn test_zero_total_reject_leaves_tree_untouched() {
        let mut root = tree(&[("Z/a", "0"), ("Y", "3")]);
        let config = LayoutConfig::default().with_zero_total(ZeroTotalPolicy::Reject);

        let result = RadialEngine::new(&config).layout(&mut root);

        match result {
            Err(SunburstError::Layout(message)) => assert!(message.contains("`Z`")),
            other => panic!("expected layout error, got {other:?}"),
        }
        assert!(root.iter().all(|node| node.placement().is_none()));
    }

    #[test]
    fn test_empty_tree_places_root_only() {
        let mut root = tree(&[]);
        let report = RadialEngine::new(&LayoutConfig::default())
            .layout(&mut root)
            .expect("layout succeeds");

        assert_eq!(report.placed(), 1);
        assert_eq!(root.x(), Some(2000.0));
    }

    #[test]
    fn test_second_layout_is_rejected() {
        let mut root = tree(&[("A", "1")]);
        let engine = RadialEngine::new(&LayoutConfig::default());

        engine.layout(&mut root).expect("first layout succeeds");
        assert!(matches!(
            engine.layout(&mut root),
            Err(SunburstError::Layout(_))
        ));
    }
}
