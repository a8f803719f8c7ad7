//! Positional `{N}` placeholder filling for SQL templates.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::sql::value::{SqlValue, render_sql_param};
use crate::substitute::try_substitute;

lazy_static! {
    /// Matches positional SQL placeholders: `{` digits `}`, e.g. `{0}`,
    /// `{12}`. The digits are captured as `idx` and form a zero-based index
    /// into the caller's argument list. There is no escape mechanism for a
    /// literal `{N}` inside a template.
    pub static ref SQL_PLACEHOLDER: Regex =
        Regex::new(r"\{(?<idx>\d+)}").expect("placeholder pattern is valid");
}

/// Errors returned by [`fill_sql_placeholders`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FillError {
    /// A placeholder referenced an argument slot past the end of the
    /// supplied argument list.
    #[error("placeholder {{{index}}} is out of bounds for {supplied} supplied argument(s)")]
    ArgumentIndexOutOfBounds {
        /// The argument-slot index the placeholder asked for.
        index: usize,
        /// How many arguments the caller supplied.
        supplied: usize,
    },
    /// The digits inside a placeholder do not fit in `usize`.
    #[error("placeholder index `{digits}` is too large")]
    IndexOverflow {
        /// The captured digit run, verbatim.
        digits: String,
    },
}

/// Fill every `{N}` placeholder in `template` with the rendered form of
/// `args[N]`.
///
/// The numeral inside a placeholder is an argument-slot index, looked up in
/// `args` regardless of the placeholder's position in the template; the same
/// slot may be referenced any number of times. Rendering follows
/// [`render_sql_param`], with `escape` as the external escape collaborator
/// for text values.
///
/// An empty template, or an empty argument list, returns the template
/// unchanged - even when it still contains placeholders.
///
/// ## Errors
///
/// [`FillError::ArgumentIndexOutOfBounds`] when a placeholder references a
/// slot `>= args.len()`. The failure is total: no partially filled template
/// is ever returned.
///
/// ## Examples
///
/// ```
/// use grout::sql::{fill_sql_placeholders, FillError, SqlValue};
///
/// let quote = |raw: &str| format!("'{}'", raw.replace('\'', "''"));
///
/// let sql = fill_sql_placeholders(
///     "SELECT * FROM test WHERE id = {0} AND name = {1}",
///     &[SqlValue::Int(1), SqlValue::from("MP")],
///     &quote,
/// ).unwrap();
/// assert_eq!(sql, "SELECT * FROM test WHERE id = 1 AND name = 'MP'");
///
/// let err = fill_sql_placeholders("id = {2}", &[SqlValue::Int(1), SqlValue::Int(2)], &quote);
/// assert_eq!(
///     err,
///     Err(FillError::ArgumentIndexOutOfBounds { index: 2, supplied: 2 })
/// );
/// ```
pub fn fill_sql_placeholders<E>(
    template: &str,
    args: &[SqlValue],
    escape: E,
) -> Result<String, FillError>
where
    E: Fn(&str) -> String,
{
    if template.is_empty() || args.is_empty() {
        return Ok(template.to_owned());
    }

    // The occurrence index from the scan is deliberately unused here: the
    // slot number captured inside the braces decides which argument fills
    // the hole.
    let filled = try_substitute(template, &SQL_PLACEHOLDER, |caps, occurrence| {
        let digits = &caps["idx"];
        let index: usize = digits.parse().map_err(|_| FillError::IndexOverflow {
            digits: digits.to_string(),
        })?;
        let value = args
            .get(index)
            .ok_or(FillError::ArgumentIndexOutOfBounds {
                index,
                supplied: args.len(),
            })?;
        trace!(occurrence, slot = index, "filling sql placeholder");
        Ok(render_sql_param(value, &escape))
    })?;

    Ok(filled.into_owned())
}
