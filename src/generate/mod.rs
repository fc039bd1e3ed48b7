//! Fragment generators: each renders one top-level piece of the final
//! SELECT statement from a [`QueryData`](crate::QueryData) view.

mod filter;
mod group_by;
mod order_by;
mod select;

pub use filter::where_clause;
pub use group_by::group_by;
pub use order_by::order_by;
pub use select::select;
