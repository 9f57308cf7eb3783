//! Deterministic node identifiers.
//!
//! Every node in a sunburst tree carries a [`NodeId`]. The root always uses
//! the well-known [`NodeId::ROOT`]; all other identifiers are handed out by an
//! [`IdGenerator`] in creation order, so two builds over the same records
//! produce the same identifiers.

use std::fmt;

/// Identifier of a node within a single tree.
///
/// The root renders as `root`, every other node as `node_<n>`.
///
/// # Examples
///
/// ```
/// use sunburst_core::identifier::{IdGenerator, NodeId};
///
/// let mut ids = IdGenerator::new();
/// let first = ids.next_id();
///
/// assert_eq!(NodeId::ROOT.to_string(), "root");
/// assert_eq!(first.to_string(), "node_1");
/// assert!(!first.is_root());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// The fixed identifier of the tree root.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns `true` if this is the root identifier.
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "root")
        } else {
            write!(f, "node_{}", self.0)
        }
    }
}

impl PartialEq<str> for NodeId {
    /// Allows direct comparison with the rendered form: `id == "node_3"`
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Monotonic source of fresh [`NodeId`]s.
///
/// A generator never yields [`NodeId::ROOT`] and never repeats an identifier.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Creates a generator whose first identifier is `node_1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused identifier.
    pub fn next_id(&mut self) -> NodeId {
        self.last += 1;
        NodeId(self.last)
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u64 {
        self.last
    }
}
