//! The orchestrator: raw specification in, SQL text plus parameters out.

use crate::{
    columns::ColumnRegistry, data::QueryData, error::Result, generate, params::Param, query::Query,
    safeql_trace_query,
};

/// Builds a parameterized SELECT statement from a raw query specification.
///
/// Returns the SQL text and the ordered parameter list for out-of-band
/// binding. Validation and configuration errors from the compilation
/// pipeline propagate untouched; no partial SQL is ever returned.
///
/// The table name is passed through verbatim and is the caller's
/// responsibility.
///
/// ```
/// use safeql::{ColumnRegistry, Query, build_query};
///
/// let registry = ColumnRegistry::new(["ProductId", "Name"]);
/// let query = Query {
///     fields: Some(vec!["ProductId".into()]),
///     ..Query::default()
/// };
///
/// let (sql, params) = build_query(&query, &registry, "[Products]").unwrap();
/// assert_eq!(sql, "SELECT [ProductId] FROM [Products]");
/// assert!(params.is_empty());
/// ```
pub fn build_query(
    query: &Query,
    registry: &ColumnRegistry,
    table: &str,
) -> Result<(String, Vec<Param>)> {
    let data = QueryData::new(query, registry, table);

    // WHERE compiles first so a self-negating filter surfaces as a
    // configuration error even when the specification is otherwise invalid.
    let (where_sql, params) = generate::where_clause(&data)?;
    let select = generate::select(&data)?;

    let mut sql = select;
    for fragment in [where_sql, generate::group_by(&data), generate::order_by(&data)] {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            sql.push(' ');
            sql.push_str(fragment);
        }
    }
    let sql = sql.trim().to_string();

    safeql_trace_query!(&sql, params.len());

    Ok((sql, params))
}
