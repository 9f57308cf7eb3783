//! Column resolution for records.

use sunburst_core::record::Record;

use crate::config::ColumnConfig;

/// Finds the path and value fields of a [`Record`].
///
/// A field is taken from the column whose name matches the configured name,
/// ignoring ASCII case. If no column carries that name, the column at the
/// configured fallback position is used instead. A named column that exists
/// but holds only whitespace counts as absent and falls through as well.
///
/// # Examples
///
/// ```
/// use sunburst::{config::ColumnConfig, structure::ColumnResolver};
/// use sunburst_core::record::Record;
///
/// let resolver = ColumnResolver::new(&ColumnConfig::default());
///
/// let named = Record::from_pairs([("Value", "3"), ("PATH", "A/B")]);
/// assert_eq!(resolver.path(&named), Some("A/B"));
/// assert_eq!(resolver.value(&named), Some("3"));
///
/// let positional = Record::from_pairs([("Category", "A/B"), ("Amount", "7")]);
/// assert_eq!(resolver.path(&positional), Some("A/B"));
/// assert_eq!(resolver.value(&positional), Some("7"));
///
/// let blank = Record::from_pairs([("Name", "A/B"), ("Path", " ")]);
/// assert_eq!(resolver.path(&blank), Some("A/B"));
/// ```
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    config: ColumnConfig,
}

impl ColumnResolver {
    pub fn new(config: &ColumnConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Returns the raw path field of `record`, if any
    pub fn path<'r>(&self, record: &'r Record) -> Option<&'r str> {
        Self::resolve(record, self.config.path(), self.config.path_index())
    }

    /// Returns the raw value field of `record`, if any
    pub fn value<'r>(&self, record: &'r Record) -> Option<&'r str> {
        Self::resolve(record, self.config.value(), self.config.value_index())
    }

    fn resolve<'r>(record: &'r Record, name: &str, index: usize) -> Option<&'r str> {
        record
            .get_ignore_case(name)
            .filter(|field| !field.trim().is_empty())
            .or_else(|| record.get_index(index).map(|(_, value)| value))
    }
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(&ColumnConfig::default())
    }
}
