//! SQL literal rendering and positional placeholder filling.
//!
//! This module turns caller-supplied values into SQL-literal tokens and
//! substitutes them into templates containing positional placeholders of the
//! form `{0}`, `{1}`, ... The numeral inside the braces is an
//! *argument-slot* index into the caller's ordered argument list; it is
//! deliberately independent of how many placeholders appear before it, so
//! `"a = {1} AND b = {1}"` renders the second argument twice.
//!
//! Escaping is NOT performed here. Callers pass their escape routine as a
//! plain `Fn(&str) -> String` that must return a complete SQL string literal
//! (delimiting quotes included) for arbitrary input.
//!
//! ## Modules
//!
//! - [`value`] - The [`SqlValue`] type and scalar/collection rendering
//! - [`fill`] - Template filling and the [`FillError`] taxonomy
//!
//! ## Examples
//!
//! ```
//! use grout::sql::{fill_sql_placeholders, SqlValue};
//!
//! let quote = |raw: &str| format!("'{}'", raw.replace('\'', "''"));
//! let sql = fill_sql_placeholders(
//!     "DELETE FROM users WHERE id = {0} OR name = {1}",
//!     &[SqlValue::Int(7), SqlValue::from("O'Brien")],
//!     quote,
//! ).unwrap();
//! assert_eq!(sql, "DELETE FROM users WHERE id = 7 OR name = 'O''Brien'");
//! ```

pub mod fill;
pub mod value;

pub use fill::{FillError, SQL_PLACEHOLDER, fill_sql_placeholders};
pub use value::{SqlValue, render_sql_param};
