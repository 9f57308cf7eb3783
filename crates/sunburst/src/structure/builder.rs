//! Building the hierarchy from records.

use log::{debug, info, trace};

use sunburst_core::{identifier::IdGenerator, record::Record, tree::Node};

use super::columns::ColumnResolver;

/// Weight used when a record has no usable value.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Splits a path into trimmed, non-empty segments.
///
/// Leading, trailing and repeated separators collapse, so `"/A//B/ "`
/// yields the same segments as `"A/B"`.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Parses a decorated numeric field into a record weight.
///
/// Every character other than an ASCII digit or `.` is dropped, then the
/// longest leading decimal number (at most one `.`) is read. A missing field,
/// or one that leaves nothing parseable, weighs [`DEFAULT_WEIGHT`]. A field
/// that parses to zero keeps weight `0` and is not replaced by the default.
///
/// # Examples
///
/// ```
/// use sunburst::structure::parse_weight;
///
/// assert_eq!(parse_weight(Some("$1,234.50")), 1234.5);
/// assert_eq!(parse_weight(Some("0.00")), 0.0);
/// assert_eq!(parse_weight(Some("n/a")), 1.0);
/// assert_eq!(parse_weight(None), 1.0);
/// ```
pub fn parse_weight(raw: Option<&str>) -> f64 {
    raw.and_then(parse_decorated_number)
        .unwrap_or(DEFAULT_WEIGHT)
}

fn parse_decorated_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // Everything from a second '.' onwards is not part of the number.
    let end = cleaned
        .match_indices('.')
        .nth(1)
        .map_or(cleaned.len(), |(index, _)| index);

    cleaned[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Builds a sunburst [`Node`] tree from records.
///
/// Each record contributes its weight to the node at the end of its path;
/// intermediate nodes are created as needed. Records without a path are
/// skipped. Node identifiers are assigned in creation order, so building the
/// same records twice gives identical trees.
///
/// The returned tree holds leaf weights only; run
/// [`aggregate`](super::aggregate) before laying it out.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    resolver: ColumnResolver,
}

impl TreeBuilder {
    pub fn new(resolver: ColumnResolver) -> Self {
        Self { resolver }
    }

    /// Builds a tree from `records`.
    pub fn build(&self, records: &[Record]) -> Node {
        let mut ids = IdGenerator::new();
        let mut root = Node::root();
        let mut skipped = 0usize;

        for (index, record) in records.iter().enumerate() {
            if !self.insert(&mut root, &mut ids, record) {
                debug!(record_index = index; "Skipping record without a path");
                skipped += 1;
            }
        }

        info!(
            records = records.len(),
            skipped,
            nodes = ids.issued() + 1;
            "Tree built"
        );

        root
    }

    /// Adds one record to the tree. Returns `false` if the record has no path.
    fn insert(&self, root: &mut Node, ids: &mut IdGenerator, record: &Record) -> bool {
        let Some(path) = self.resolver.path(record) else {
            return false;
        };

        let mut segments = path_segments(path).peekable();
        if segments.peek().is_none() {
            return false;
        }

        let weight = parse_weight(self.resolver.value(record));
        let leaf = segments.fold(root, |node, segment| node.child_or_insert(segment, ids));
        leaf.add_value(weight);

        trace!(node_id:% = leaf.id(), weight; "Record weight added");
        true
    }
}
