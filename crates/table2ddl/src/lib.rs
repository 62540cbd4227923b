//! # table2ddl
//!
//! Infer SQL column types from loosely-typed in-memory tabular data and
//! emit dialect-aware `CREATE TABLE` statements.
//!
//! The core is a single synchronous scan over the table:
//!
//! - **Type detection** widens each column's tag along a monotonic lattice
//!   (boolean, sized integers, float, VARCHAR) so the result is independent
//!   of row order.
//! - **Name normalization** sanitizes and deduplicates column identifiers
//!   against the dialect's reserved words and length limits.
//! - **Width sizing** composes padding, stepped bucketing, max-forcing,
//!   truncation, and zero-guarding over the widest observed byte length.
//! - **Dialects** are immutable configuration values; the bundled
//!   [`DialectConfig::base`] and [`DialectConfig::redshift`] differ in
//!   reserved words, identifier limits, integer classes, and clustering
//!   clause support.
//!
//! Executing the generated statement, staging data, and connection handling
//! are out of scope - the caller owns everything past the statement string.
//!
//! ## Example
//!
//! ```rust
//! use table2ddl::{create_statement, DialectConfig, MemoryTable, Scalar, StatementOptions};
//!
//! let table = MemoryTable::new(
//!     ["ID", "Name"],
//!     vec![
//!         vec![Scalar::Int(1), Scalar::from("Jim")],
//!         vec![Scalar::Int(2), Scalar::from("Sarah")],
//!     ],
//! );
//!
//! let dialect = DialectConfig::redshift();
//! let sql = create_statement(&table, "people", &dialect, &StatementOptions::default())?;
//! assert!(sql.contains("\"id\" smallint"));
//! assert!(sql.contains("\"name\" varchar(5)"));
//! # Ok::<(), table2ddl::DdlError>(())
//! ```

pub mod builder;
pub mod core;
pub mod dialect;
pub mod error;
pub mod infer;
pub mod names;
pub mod width;

// Re-exports for convenient access
pub use builder::{create_statement, infer_schema, SchemaMapping, StatementOptions};
pub use core::{MemoryTable, Scalar, TableSource};
pub use dialect::{DialectConfig, IntClass, ReservedRename};
pub use error::{DdlError, Result};
pub use infer::{detect_data_type, get_bigger_int, is_valid_sql_num};
pub use names::{format_column, format_columns};
