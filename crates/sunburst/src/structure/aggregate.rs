//! Bottom-up value aggregation.

use sunburst_core::tree::Node;

/// Recomputes the value of every internal node as the sum of its children
/// and returns the total of `node`.
///
/// Children are finalized before their parent. Leaves keep the weight the
/// builder accumulated; an internal node's own accumulated weight is replaced
/// by its children's sum.
///
/// # Examples
///
/// ```
/// use sunburst::structure::aggregate;
/// use sunburst_core::{identifier::IdGenerator, tree::Node};
///
/// let mut ids = IdGenerator::new();
/// let mut root = Node::root();
/// let a = root.child_or_insert("A", &mut ids);
/// a.child_or_insert("B", &mut ids).add_value(10.0);
/// a.child_or_insert("C", &mut ids).add_value(30.0);
///
/// assert_eq!(aggregate(&mut root), 40.0);
/// assert_eq!(root.child("A").unwrap().value(), 40.0);
/// ```
pub fn aggregate(node: &mut Node) -> f64 {
    if node.is_leaf() {
        return node.value();
    }

    let total = node.children_mut().map(aggregate).sum();
    node.set_value(total);
    total
}
