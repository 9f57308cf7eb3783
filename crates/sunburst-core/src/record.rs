//! Input rows for the tree builder.
//!
//! A [`Record`] is one row of a table: an ordered mapping from column name
//! to field text. Column order is significant because the positional
//! fallbacks used by column resolution ("first column", "second column")
//! refer to it.

use indexmap::IndexMap;

/// One input row, keyed by column name in header order.
///
/// # Examples
///
/// ```
/// use sunburst_core::record::Record;
///
/// let record = Record::from_pairs([("Path", "A/B"), ("Value", "10")]);
///
/// assert_eq!(record.get("Path"), Some("A/B"));
/// assert_eq!(record.get_ignore_case("value"), Some("10"));
/// assert_eq!(record.get_index(0), Some(("Path", "A/B")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs, keeping their order.
    ///
    /// A repeated column name keeps its first position and takes the last value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (column, value) in pairs {
            record.insert(column, value);
        }
        record
    }

    /// Sets a field, appending the column if it is new
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Looks up a field by exact column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Looks up a field by column name, ignoring ASCII case.
    ///
    /// An exact match wins over a case-insensitive one; otherwise the first
    /// matching column in header order is returned.
    pub fn get_ignore_case(&self, column: &str) -> Option<&str> {
        self.get(column).or_else(|| {
            self.fields
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(column))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Returns the `(column, value)` pair at a position in header order
    pub fn get_index(&self, index: usize) -> Option<(&str, &str)> {
        self.fields
            .get_index(index)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let record = Record::from_pairs([("b", "2"), ("a", "1"), ("c", "3")]);

        let columns: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(columns, vec!["b", "a", "c"]);
        assert_eq!(record.get_index(1), Some(("a", "1")));
        assert_eq!(record.get_index(3), None);
    }

    #[test]
    fn test_get_ignore_case_prefers_exact_match() {
        let record = Record::from_pairs([("PATH", "upper"), ("path", "lower")]);

        assert_eq!(record.get_ignore_case("path"), Some("lower"));
        assert_eq!(record.get_ignore_case("Path"), Some("upper"));
        assert_eq!(record.get_ignore_case("missing"), None);
    }

    #[test]
    fn test_repeated_column_keeps_position() {
        let record = Record::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get_index(0), Some(("a", "3")));
    }

    #[test]
    fn test_empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.get_index(0), None);
    }

    #[test]
    fn test_collect_from_iterator() {
        let record: Record = vec![("Path".to_string(), "x".to_string())]
            .into_iter()
            .collect();
        assert_eq!(record.get("Path"), Some("x"));
    }
}
