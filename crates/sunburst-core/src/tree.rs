//! The hierarchy built from path segments.
//!
//! A [`Node`] owns its children outright, keyed by the exact segment text
//! they represent. Nodes are created lazily the first time a prefix chain is
//! seen and are never removed or re-keyed afterwards.
//!
//! The tree moves through three stages:
//!
//! ```text
//! built      values accumulated on the nodes where records terminated
//!   ↓ aggregate
//! aggregated every internal value is the sum of its children
//!   ↓ layout
//! placed     every node carries a Placement
//! ```

use indexmap::IndexMap;

use crate::{
    geometry::{AngularSpan, Point},
    identifier::{IdGenerator, NodeId},
};

/// Label given to the root node.
pub const ROOT_LABEL: &str = "Center";

/// Where the layout put a node: its canvas position and the angular interval
/// it was allotted by its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    position: Point,
    span: AngularSpan,
}

impl Placement {
    pub fn new(position: Point, span: AngularSpan) -> Self {
        Self { position, span }
    }

    /// Canvas position of the node's center
    pub fn position(self) -> Point {
        self.position
    }

    /// Angular interval owned by the node
    pub fn span(self) -> AngularSpan {
        self.span
    }
}

/// A node of the sunburst hierarchy.
///
/// # Examples
///
/// ```
/// use sunburst_core::{identifier::IdGenerator, tree::Node};
///
/// let mut ids = IdGenerator::new();
/// let mut root = Node::root();
///
/// let a = root.child_or_insert("A", &mut ids);
/// a.child_or_insert("B", &mut ids).add_value(10.0);
///
/// let b = root.find(&["A", "B"]).unwrap();
/// assert_eq!(b.level(), 2);
/// assert_eq!(b.value(), 10.0);
/// assert_eq!(b.id().to_string(), "node_2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    label: String,
    level: usize,
    value: f64,
    children: IndexMap<String, Node>,
    placement: Option<Placement>,
}

impl Node {
    /// Creates an empty root node with id [`NodeId::ROOT`] and label [`ROOT_LABEL`].
    pub fn root() -> Self {
        Self::new(NodeId::ROOT, ROOT_LABEL.to_string(), 0)
    }

    fn new(id: NodeId, label: String, level: usize) -> Self {
        Self {
            id,
            label,
            level,
            value: 0.0,
            children: IndexMap::new(),
            placement: None,
        }
    }

    /// Returns the child keyed by `label`, creating it first if absent.
    ///
    /// A new child gets a fresh id from `ids`, a level one below this node,
    /// no children and a provisional value of `0`.
    pub fn child_or_insert(&mut self, label: &str, ids: &mut IdGenerator) -> &mut Node {
        let level = self.level + 1;
        self.children
            .entry(label.to_string())
            .or_insert_with(|| Node::new(ids.next_id(), label.to_string(), level))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Depth from the root (root = 0)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Weight of this node.
    ///
    /// For internal nodes this is only meaningful after aggregation.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Adds a record weight to this node
    pub fn add_value(&mut self, weight: f64) {
        self.value += weight;
    }

    /// Overwrites the value, used when aggregating children
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Looks up a direct child by its exact segment text
    pub fn child(&self, label: &str) -> Option<&Node> {
        self.children.get(label)
    }

    /// Follows a sequence of segments from this node
    pub fn find(&self, segments: &[&str]) -> Option<&Node> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Direct children in insertion order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> + ExactSizeIterator {
        self.children.values()
    }

    /// Mutable access to direct children in insertion order
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.children.values_mut()
    }

    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    /// The placement assigned by the layout, if it has run
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Records the layout result for this node.
    ///
    /// # Panics
    /// Panics in debug mode if the node has already been placed. Layout
    /// writes each node exactly once.
    pub fn place(&mut self, placement: Placement) {
        debug_assert!(
            self.placement.is_none(),
            "Node {} placed twice",
            self.id
        );
        self.placement = Some(placement);
    }

    /// Canvas x-coordinate, if placed
    pub fn x(&self) -> Option<f64> {
        self.placement.map(|placement| placement.position().x())
    }

    /// Canvas y-coordinate, if placed
    pub fn y(&self) -> Option<f64> {
        self.placement.map(|placement| placement.position().y())
    }

    /// Iterates over this node and all descendants, parents before children.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Iterates over `(parent, child)` pairs for every edge in the subtree,
    /// grouped by parent with parents in pre-order.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.iter()
            .flat_map(|parent| parent.children().map(move |child| (parent, child)))
    }

    /// Total number of nodes in the subtree, including this one
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Sum of the values held by the leaves of the subtree
    pub fn leaf_total(&self) -> f64 {
        self.iter()
            .filter(|node| node.is_leaf())
            .map(Node::value)
            .sum()
    }
}

/// Pre-order traversal over a subtree. See [`Node::iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}
