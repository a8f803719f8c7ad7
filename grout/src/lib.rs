//! Grout - String utilities for the ORM layer
//!
//! This library provides the string-shaped glue the mapping layer is built
//! on: converting identifiers between naming conventions, guessing bean
//! accessor names, and safely filling positional `{N}` placeholders in SQL
//! templates.
//!
//! ## Modules
//!
//! - [`substitute`] - Single-scan, occurrence-indexed pattern substitution
//! - [`sql`] - SQL literal rendering and `{N}` placeholder filling
//! - [`casing`] - Naming-convention conversion (camel, underscore, hyphen)
//! - [`predicate`] - Null-safe string predicates
//! - [`accessor`] - Java-bean accessor name guessing
//!
//! Everything here is a pure function over `&str`: no shared mutable state,
//! safe to call from any thread. SQL escaping itself is NOT implemented in
//! this crate; callers supply their escape routine as a plain
//! `Fn(&str) -> String` capability.
//!
//! ## Examples
//!
//! ```
//! use grout::casing::camel_to_underline;
//! use grout::sql::{fill_sql_placeholders, SqlValue};
//!
//! assert_eq!(camel_to_underline("userName"), "user_name");
//!
//! let quote = |raw: &str| format!("'{}'", raw.replace('\'', "''"));
//! let sql = fill_sql_placeholders(
//!     "SELECT * FROM test WHERE id = {0} AND name = {1}",
//!     &[SqlValue::Int(1), SqlValue::from("MP")],
//!     quote,
//! ).unwrap();
//! assert_eq!(sql, "SELECT * FROM test WHERE id = 1 AND name = 'MP'");
//! ```

pub mod accessor;
pub mod casing;
pub mod predicate;
pub mod sql;
pub mod substitute;

pub use sql::{FillError, SqlValue, fill_sql_placeholders, render_sql_param};
pub use substitute::{substitute, try_substitute};
