//! Allow-list driven dynamic SQL SELECT builder.
//!
//! Translates a declarative query specification (selected columns, optional
//! filters, grouping and sort) into a parameterized SELECT statement plus an
//! ordered list of named parameters. Every identifier in the generated text
//! comes from a closed [`ColumnRegistry`] allow-list; values are never
//! interpolated into SQL text.
//!
//! ```
//! use safeql::{ColumnRegistry, Filter, Query, build_query};
//!
//! let registry = ColumnRegistry::new(["ProductId", "Name", "Age"]);
//! let query = Query {
//!     fields: Some(vec!["ProductId".into(), "Name".into()]),
//!     filters: Some(vec![Filter {
//!         property: "Name".into(),
//!         values: Some(vec!["A".into(), "B".into()]),
//!         ..Filter::default()
//!     }]),
//!     ..Query::default()
//! };
//!
//! let (sql, params) = build_query(&query, &registry, "[Products]").unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT [ProductId], [Name] FROM [Products] WHERE [Name] IN @Name_IN"
//! );
//! assert_eq!(params[0].name(), "@Name_IN");
//! ```

pub mod builder;
pub mod clause;
pub mod columns;
pub mod compile;
pub mod data;
pub mod error;
pub mod generate;
pub mod params;
pub mod query;
pub mod tracing;
pub mod value;

// Re-export key types
pub use builder::build_query;
pub use clause::{Clause, ClauseParams};
pub use columns::{ColumnRegistry, ColumnSchema};
pub use compile::ClauseCompiler;
pub use data::{QueryData, SortDirection};
pub use error::{BuildError, Result};
pub use params::{Param, Placeholder, PlaceholderStyle};
pub use query::{Filter, FilterRange, Query, RangeOperator};
pub use value::{ParamValue, SqlValue};
