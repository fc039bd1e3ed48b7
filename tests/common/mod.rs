//! Shared builders for the integration tests.

#![allow(dead_code)]

use safeql::{ColumnRegistry, Filter, FilterRange, Query, RangeOperator, SqlValue};

pub const TABLE: &str = "[MySchema].[MyTable]";

pub fn registry() -> ColumnRegistry {
    ColumnRegistry::new(["ProductId", "Name", "Age", "Style", "Price"])
}

pub fn query(fields: &[&str]) -> Query {
    Query {
        fields: Some(fields.iter().map(|f| (*f).into()).collect()),
        ..Query::default()
    }
}

pub fn values_filter(property: &str, values: &[&str]) -> Filter {
    Filter {
        property: property.into(),
        values: Some(values.iter().map(|v| SqlValue::from(*v)).collect()),
        ..Filter::default()
    }
}

pub fn range_filter(property: &str, range: FilterRange) -> Filter {
    Filter {
        property: property.into(),
        range: Some(range),
        ..Filter::default()
    }
}

pub fn range(start: Option<SqlValue>, end: Option<SqlValue>, op: RangeOperator) -> FilterRange {
    FilterRange {
        start,
        end,
        range_operator: op,
    }
}
