//! The allow-list of column identifiers that may reach generated SQL.

use compact_str::CompactString;
use hashbrown::HashSet;

/// A type that can enumerate its column names at compile time.
///
/// Implement this on a data model to derive a [`ColumnRegistry`] from it,
/// the same way a reflective implementation would walk the model's public
/// fields:
///
/// ```
/// use safeql::{ColumnRegistry, ColumnSchema};
///
/// struct Product;
///
/// impl ColumnSchema for Product {
///     const COLUMNS: &'static [&'static str] = &["ProductId", "Name", "Price"];
/// }
///
/// let registry = ColumnRegistry::from_schema::<Product>();
/// assert!(registry.is_known("ProductId"));
/// ```
pub trait ColumnSchema {
    const COLUMNS: &'static [&'static str];
}

/// The closed allow-list of known column names.
///
/// Every identifier embedded in generated SQL text is resolved through this
/// registry; caller input never reaches the output directly. Lookups for
/// unknown names resolve to the empty string rather than echoing the input,
/// so untrusted text cannot leak into SQL even on misuse.
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    /// Canonical column names in registration order.
    columns: Vec<CompactString>,
    /// Membership index over the same names.
    index: HashSet<CompactString>,
}

impl ColumnRegistry {
    /// Creates a registry from an explicit list of column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        let columns: Vec<CompactString> = columns.into_iter().map(Into::into).collect();
        let index = columns.iter().cloned().collect();
        Self { columns, index }
    }

    /// Creates a registry from a data model's declared columns.
    pub fn from_schema<T: ColumnSchema>() -> Self {
        Self::new(T::COLUMNS.iter().copied())
    }

    /// Returns true if `name` is on the allow-list.
    pub fn is_known(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Returns the canonical form of a known column name.
    ///
    /// Returns the empty string for unknown names. This guarantees the
    /// registry controls every column string handed out, even when callers
    /// skip validation.
    pub fn canonical(&self, name: &str) -> &str {
        match self.index.get(name) {
            Some(stored) => stored.as_str(),
            None => "",
        }
    }

    /// Returns true if every name in `names` is on the allow-list.
    pub fn contains_only_known<I>(&self, names: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        !self.contains_any_unknown(names)
    }

    /// Returns true if any name in `names` is not on the allow-list.
    pub fn contains_any_unknown<I>(&self, names: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names.into_iter().any(|name| !self.is_known(name.as_ref()))
    }

    /// The known column names, in registration order.
    pub fn known_columns(&self) -> &[CompactString] {
        &self.columns
    }
}
