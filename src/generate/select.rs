use crate::{
    data::QueryData,
    error::{BuildError, Result},
};

/// Renders the SELECT fragment: `SELECT [col1], [col2] FROM table`.
///
/// This is the validity gate for the whole statement; it fails with
/// [`BuildError::Validation`] on any invalid specification so no malformed
/// SQL is ever assembled.
pub fn select(data: &QueryData) -> Result<String> {
    if data.is_invalid() {
        return Err(BuildError::Validation(
            "the provided query specification is invalid".into(),
        ));
    }

    Ok(format!(
        "SELECT {} FROM {}",
        data.columns().join(", "),
        data.table()
    ))
}
