use crate::data::QueryData;

/// Renders the GROUP BY fragment, or the empty string when the query has no
/// grouping. Columns appear in input order, canonicalized.
pub fn group_by(data: &QueryData) -> String {
    let columns = data.group_by_columns();
    if columns.is_empty() {
        String::new()
    } else {
        format!("GROUP BY {}", columns.join(", "))
    }
}
