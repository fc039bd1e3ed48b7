//! The clause AST: one rendered predicate plus its bound parameters.

use std::fmt;

use compact_str::{CompactString, format_compact};
use smallvec::{SmallVec, smallvec};

use crate::{
    params::{Param, Placeholder},
    value::SqlValue,
};

/// Parameters produced by a single clause. BETWEEN binds two, null tests
/// bind none, everything else binds one.
pub type ClauseParams = SmallVec<[Param; 2]>;

/// One predicate over a canonical column.
///
/// The variant set is fixed and closed; the renderer dispatches by
/// exhaustive matching. Each variant carries the registry-canonical column
/// name, so rendering never touches caller-supplied identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Equal {
        column: CompactString,
        value: SqlValue,
    },
    /// Binds its values as one sequence-typed parameter; the binding layer
    /// expands it. The operator token is `IN` regardless of arity.
    In {
        column: CompactString,
        values: Vec<SqlValue>,
    },
    GreaterThan {
        column: CompactString,
        value: SqlValue,
    },
    LessThan {
        column: CompactString,
        value: SqlValue,
    },
    GreaterThanEqual {
        column: CompactString,
        value: SqlValue,
    },
    LessThanEqual {
        column: CompactString,
        value: SqlValue,
    },
    Between {
        column: CompactString,
        start: SqlValue,
        end: SqlValue,
    },
    IsNull {
        column: CompactString,
    },
    IsNotNull {
        column: CompactString,
    },
}

impl Clause {
    /// The canonical column this clause predicates on.
    pub fn column(&self) -> &str {
        match self {
            Clause::Equal { column, .. }
            | Clause::In { column, .. }
            | Clause::GreaterThan { column, .. }
            | Clause::LessThan { column, .. }
            | Clause::GreaterThanEqual { column, .. }
            | Clause::LessThanEqual { column, .. }
            | Clause::Between { column, .. }
            | Clause::IsNull { column }
            | Clause::IsNotNull { column } => column,
        }
    }

    /// The operator token for comparison clauses.
    fn operator(&self) -> &'static str {
        match self {
            Clause::Equal { .. } => "=",
            Clause::In { .. } => "IN",
            Clause::GreaterThan { .. } => ">",
            Clause::LessThan { .. } => "<",
            Clause::GreaterThanEqual { .. } => ">=",
            Clause::LessThanEqual { .. } => "<=",
            Clause::Between { .. } => "BETWEEN",
            Clause::IsNull { .. } | Clause::IsNotNull { .. } => "",
        }
    }

    /// The parameter-name suffix for comparison clauses. Names derived from
    /// (column, suffix) never collide across operators on the same column.
    fn suffix(&self) -> &'static str {
        match self {
            Clause::Equal { .. } => "EQUAL",
            Clause::In { .. } => "IN",
            Clause::GreaterThan { .. } => "GREATER",
            Clause::LessThan { .. } => "LESS",
            Clause::GreaterThanEqual { .. } => "GREATER_EQUAL",
            Clause::LessThanEqual { .. } => "LESS_EQUAL",
            Clause::Between { .. } | Clause::IsNull { .. } | Clause::IsNotNull { .. } => "",
        }
    }

    fn placeholder(&self) -> Placeholder {
        Placeholder::at(format_compact!("{}_{}", self.column(), self.suffix()))
    }

    /// The parameters this clause binds, in placeholder order.
    pub fn parameters(&self) -> ClauseParams {
        match self {
            Clause::Equal { value, .. }
            | Clause::GreaterThan { value, .. }
            | Clause::LessThan { value, .. }
            | Clause::GreaterThanEqual { value, .. }
            | Clause::LessThanEqual { value, .. } => {
                smallvec![Param::new(self.placeholder(), value.clone())]
            }
            Clause::In { values, .. } => {
                smallvec![Param::new(self.placeholder(), values.clone())]
            }
            Clause::Between { column, start, end } => smallvec![
                Param::new(
                    Placeholder::at(format_compact!("{column}_START")),
                    start.clone(),
                ),
                Param::new(Placeholder::at(format_compact!("{column}_END")), end.clone()),
            ],
            Clause::IsNull { .. } | Clause::IsNotNull { .. } => SmallVec::new(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Between { column, .. } => {
                write!(f, "[{column}] BETWEEN @{column}_START AND @{column}_END")
            }
            Clause::IsNull { column } => write!(f, "[{column}] IS NULL"),
            Clause::IsNotNull { column } => write!(f, "[{column}] IS NOT NULL"),
            _ => write!(
                f,
                "[{}] {} {}",
                self.column(),
                self.operator(),
                self.placeholder(),
            ),
        }
    }
}
