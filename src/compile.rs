//! Compilation of one filter into its ordered clause sequence.

use compact_str::CompactString;

use crate::{
    clause::Clause,
    columns::ColumnRegistry,
    error::{BuildError, Result},
    query::{Filter, FilterRange, RangeOperator},
    value::SqlValue,
};

/// Compiles filters into clause sequences against a column registry.
///
/// `compile` is a pure function of (filter, registry): the same inputs
/// always yield a structurally identical clause sequence.
#[derive(Debug, Clone, Copy)]
pub struct ClauseCompiler<'a> {
    registry: &'a ColumnRegistry,
}

impl<'a> ClauseCompiler<'a> {
    pub fn new(registry: &'a ColumnRegistry) -> Self {
        Self { registry }
    }

    /// Compiles one filter into its clauses, in fixed order: values-clause,
    /// then range-clause, then null-clause. The groups are OR-combined by
    /// the WHERE generator later.
    ///
    /// Fails with [`BuildError::Configuration`] when the filter carries
    /// non-empty values together with an explicit `include_nulls = false`;
    /// that combination negates the filter entirely.
    pub fn compile(&self, filter: &Filter) -> Result<Vec<Clause>> {
        // Resolved once; unknown properties resolve to the empty string and
        // the validity checks reject them before any output is assembled.
        let column = self.registry.canonical(&filter.property);
        let mut clauses = Vec::new();

        if let Some(values) = filter.values.as_ref().filter(|values| !values.is_empty()) {
            if filter.include_nulls == Some(false) {
                return Err(BuildError::Configuration(
                    "a filter cannot combine values with includeNulls=false; \
                     this negates the filter entirely"
                        .into(),
                ));
            }
            clauses.push(values_clause(column, values));
        }

        if let Some(range) = &filter.range {
            clauses.push(range_clause(column, range));
        }

        match filter.include_nulls {
            Some(true) => clauses.push(Clause::IsNull {
                column: column.into(),
            }),
            Some(false) => clauses.push(Clause::IsNotNull {
                column: column.into(),
            }),
            None => {}
        }

        Ok(clauses)
    }
}

fn values_clause(column: &str, values: &[SqlValue]) -> Clause {
    match values {
        [value] => Clause::Equal {
            column: column.into(),
            value: value.clone(),
        },
        _ => Clause::In {
            column: column.into(),
            values: values.to_vec(),
        },
    }
}

fn range_clause(column: &str, range: &FilterRange) -> Clause {
    let column = CompactString::from(column);
    match range.range_operator {
        RangeOperator::GreaterThan => Clause::GreaterThan {
            column,
            value: single_bound(range),
        },
        RangeOperator::LessThan => Clause::LessThan {
            column,
            value: single_bound(range),
        },
        RangeOperator::GreaterThanEqual => Clause::GreaterThanEqual {
            column,
            value: single_bound(range),
        },
        RangeOperator::LessThanEqual => Clause::LessThanEqual {
            column,
            value: single_bound(range),
        },
        RangeOperator::Between => Clause::Between {
            column,
            start: range.start.clone().unwrap_or(SqlValue::Null),
            end: range.end.clone().unwrap_or(SqlValue::Null),
        },
    }
}

/// Whichever of start/end is set; structural validity forbids both or
/// neither for the unary operators.
fn single_bound(range: &FilterRange) -> SqlValue {
    range
        .start
        .clone()
        .or_else(|| range.end.clone())
        .unwrap_or(SqlValue::Null)
}
