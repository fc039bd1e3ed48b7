use crate::data::{QueryData, SortDirection};

/// Renders the ORDER BY fragment, or the empty string when the sort column
/// is blank.
///
/// Ascending sorts force NULLs last via a CASE expression, since plain
/// ascending collation does not guarantee NULLs-last on every engine.
pub fn order_by(data: &QueryData) -> String {
    let Some(column) = data.sort_column() else {
        return String::new();
    };

    match data.sort_direction() {
        SortDirection::Descending => format!("ORDER BY {column} DESC"),
        SortDirection::Ascending => {
            format!("ORDER BY CASE WHEN {column} IS NULL THEN 1 ELSE 0 END, {column}")
        }
    }
}
