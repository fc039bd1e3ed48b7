//! Scalar values routed from the wire format through to the binding layer.

use compact_str::CompactString;
use serde::Deserialize;

/// A scalar value carried by a filter.
///
/// The builder never interprets values; it only routes them to the parameter
/// list for out-of-band binding. The set is closed: anything the wire format
/// can carry maps onto one of these variants. Timestamp-like values travel
/// as [`SqlValue::Text`] since the wire format has no native timestamp type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value
    Text(CompactString),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Boolean(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(CompactString::from(value))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(CompactString::from(value))
    }
}

/// The payload of one bound parameter: a single scalar, or a sequence of
/// scalars for `IN` predicates. The binding layer expands a [`ParamValue::List`]
/// itself; the builder emits it as one named parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(SqlValue),
    List(Vec<SqlValue>),
}

impl From<SqlValue> for ParamValue {
    fn from(value: SqlValue) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<SqlValue>> for ParamValue {
    fn from(values: Vec<SqlValue>) -> Self {
        ParamValue::List(values)
    }
}
