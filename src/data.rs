//! The validated view over a raw query specification.

use crate::{
    clause::Clause, columns::ColumnRegistry, compile::ClauseCompiler, error::Result, query::Filter,
    query::Query,
};

/// Sort order for the ORDER BY fragment. Anything other than a
/// case-insensitive `desc` direction sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A raw [`Query`] paired with the registry and table it is judged against.
///
/// Constructed once per build and immutable thereafter. Exposes validity
/// plus the derived views the fragment generators consume: bracket-quoted
/// canonical columns, per-filter clause groups, group-by columns and the
/// sort column/direction. Clause groups are recomputed on every access
/// rather than cached.
#[derive(Debug, Clone)]
pub struct QueryData<'a> {
    query: &'a Query,
    registry: &'a ColumnRegistry,
    compiler: ClauseCompiler<'a>,
    table: &'a str,
}

impl<'a> QueryData<'a> {
    pub fn new(query: &'a Query, registry: &'a ColumnRegistry, table: &'a str) -> Self {
        Self {
            query,
            registry,
            compiler: ClauseCompiler::new(registry),
            table,
        }
    }

    /// The table name, passed through verbatim from the caller.
    pub fn table(&self) -> &str {
        self.table
    }

    pub fn is_valid(&self) -> bool {
        self.contains_only_known_fields()
            && self.contains_valid_filters()
            && self.contains_valid_group_by()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn is_distinct(&self) -> bool {
        self.query.distinct.unwrap_or(false)
    }

    /// One clause group per filter, in filter order. Each group is later
    /// OR-combined; groups are AND-combined across filters.
    pub fn clause_groups(&self) -> Result<Vec<Vec<Clause>>> {
        match &self.query.filters {
            Some(filters) => filters
                .iter()
                .map(|filter| self.compiler.compile(filter))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    /// The selected columns, canonicalized and bracket-quoted, in input
    /// order.
    pub fn columns(&self) -> Vec<String> {
        self.query
            .fields
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|field| bracket(self.registry.canonical(field)))
            .collect()
    }

    /// The group-by columns, canonicalized and bracket-quoted, in input
    /// order. Empty when the query has no grouping.
    pub fn group_by_columns(&self) -> Vec<String> {
        self.query
            .group_by
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|field| bracket(self.registry.canonical(field)))
            .collect()
    }

    /// The bracket-quoted sort column, or `None` when the sort is blank.
    pub fn sort_column(&self) -> Option<String> {
        self.query
            .sort
            .as_deref()
            .filter(|sort| !sort.trim().is_empty())
            .map(|sort| bracket(self.registry.canonical(sort)))
    }

    pub fn sort_direction(&self) -> SortDirection {
        match &self.query.direction {
            Some(direction) if direction.eq_ignore_ascii_case("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// An absent field list fails closed: it is treated as containing
    /// unknown columns.
    fn contains_only_known_fields(&self) -> bool {
        match &self.query.fields {
            Some(fields) => self.registry.contains_only_known(fields),
            None => false,
        }
    }

    pub fn contains_valid_filters(&self) -> bool {
        match &self.query.filters {
            None => true,
            Some(filters) if filters.is_empty() => true,
            Some(filters) => {
                filters.iter().all(Filter::is_valid)
                    && self
                        .registry
                        .contains_only_known(filters.iter().map(|filter| &filter.property))
            }
        }
    }

    /// Grouping is consistent when either the group-by set equals the
    /// selected fields and `distinct` is true, or the group-by is a subset
    /// of the selected fields and `distinct` is false or absent.
    pub fn contains_valid_group_by(&self) -> bool {
        let Some(group_by) = self.query.group_by.as_deref().filter(|g| !g.is_empty()) else {
            return true;
        };
        let fields = self.query.fields.as_deref().unwrap_or_default();

        self.registry.contains_only_known(group_by)
            && ((self.group_by_covers_all_fields() && self.query.distinct == Some(true))
                || (group_by.iter().all(|group| fields.contains(group)) && !self.is_distinct()))
    }

    pub fn group_by_covers_all_fields(&self) -> bool {
        let mut fields: Vec<_> = self.query.fields.as_deref().unwrap_or_default().to_vec();
        let mut group_by: Vec<_> = self.query.group_by.as_deref().unwrap_or_default().to_vec();
        fields.sort_unstable();
        group_by.sort_unstable();
        fields == group_by
    }
}

fn bracket(name: &str) -> String {
    format!("[{name}]")
}
