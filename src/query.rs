//! The wire-format query model and its structural validity rules.

use compact_str::CompactString;
use serde::Deserialize;

use crate::value::SqlValue;

/// Comparison operator carried by a [`FilterRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RangeOperator {
    GreaterThan,
    LessThan,
    GreaterThanEqual,
    LessThanEqual,
    Between,
}

/// A bounded or half-bounded range predicate on one column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRange {
    #[serde(default)]
    pub start: Option<SqlValue>,
    #[serde(default)]
    pub end: Option<SqlValue>,
    pub range_operator: RangeOperator,
}

impl FilterRange {
    /// A range is structurally valid when GT/LT/GTE/LTE carry exactly one
    /// bound and BETWEEN carries both.
    pub fn is_valid(&self) -> bool {
        match self.range_operator {
            RangeOperator::Between => self.start.is_some() && self.end.is_some(),
            RangeOperator::GreaterThan
            | RangeOperator::LessThan
            | RangeOperator::GreaterThanEqual
            | RangeOperator::LessThanEqual => self.start.is_some() != self.end.is_some(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

/// One filter in a query specification. A filter contributes one OR-group
/// of clauses to the WHERE fragment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(default)]
    pub property: CompactString,
    #[serde(default)]
    pub values: Option<Vec<SqlValue>>,
    #[serde(default)]
    pub range: Option<FilterRange>,
    #[serde(default)]
    pub include_nulls: Option<bool>,
}

impl Filter {
    /// A filter is valid with a non-blank property and at least one usable
    /// predicate source: an explicit null preference without a range, a
    /// non-empty value list, or a structurally valid range. A filter with
    /// only `include_nulls = false` is a pure NOT-NULL predicate and valid.
    pub fn is_valid(&self) -> bool {
        !self.property.trim().is_empty()
            && ((self.include_nulls.is_some() && self.range.is_none())
                || self.has_values()
                || self.range.as_ref().is_some_and(FilterRange::is_valid))
    }

    pub(crate) fn has_values(&self) -> bool {
        self.values.as_ref().is_some_and(|values| !values.is_empty())
    }
}

/// The raw, untrusted query specification as received off the wire.
///
/// Field names follow the wire format (camelCase). All parts except the
/// selected fields are optional; validity is judged against a
/// [`ColumnRegistry`](crate::ColumnRegistry) by
/// [`QueryData`](crate::QueryData), never by the model itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Columns to select, in output order. Absent counts as invalid
    /// (fail closed), not as an empty selection.
    #[serde(default)]
    pub fields: Option<Vec<CompactString>>,
    #[serde(default)]
    pub distinct: Option<bool>,
    #[serde(default)]
    pub filters: Option<Vec<Filter>>,
    #[serde(default)]
    pub group_by: Option<Vec<CompactString>>,
    #[serde(default)]
    pub sort: Option<CompactString>,
    #[serde(default)]
    pub direction: Option<CompactString>,
}
