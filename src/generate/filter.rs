use crate::{clause::Clause, data::QueryData, error::Result, params::Param};

/// Renders the WHERE fragment and extracts its parameters.
///
/// Each filter contributes one OR-group; empty groups are dropped. With no
/// non-empty groups the fragment is the empty string (no WHERE keyword).
/// A single group is rendered bare; two or more groups are each
/// parenthesized and joined with ` AND `. Parameters come out in filter
/// order, then clause order within each filter.
pub fn where_clause(data: &QueryData) -> Result<(String, Vec<Param>)> {
    let groups: Vec<Vec<Clause>> = data
        .clause_groups()?
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();

    if groups.is_empty() {
        return Ok((String::new(), Vec::new()));
    }

    let params = groups
        .iter()
        .flatten()
        .flat_map(Clause::parameters)
        .collect();

    let (open, close) = if groups.len() > 1 { ("(", ")") } else { ("", "") };
    let rendered: Vec<String> = groups
        .iter()
        .map(|group| {
            let predicates = group
                .iter()
                .map(Clause::to_string)
                .collect::<Vec<_>>()
                .join(" OR ");
            format!("{open}{predicates}{close}")
        })
        .collect();

    Ok((format!("WHERE {}", rendered.join(" AND ")), params))
}
