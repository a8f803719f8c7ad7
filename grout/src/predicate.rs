//! Null-safe string predicates.
//!
//! These mirror the permissive helpers the mapping layer leans on when it is
//! handed values that may simply be absent: every function here takes
//! `Option<&str>` where absence is meaningful, returns a defined answer for
//! every input, and never fails. The defined answers are deliberate:
//! two absent values compare equal for the suffix check, while an absent
//! pattern or input makes a match predicate false.
//!
//! ## Examples
//!
//! ```
//! use grout::predicate::{ends_with, is_empty, matches_pattern};
//!
//! assert!(is_empty(None));
//! assert!(is_empty(Some("")));
//! assert!(ends_with(None, None));
//! assert!(!ends_with(Some("def"), None));
//! assert!(matches_pattern(Some(r"\d+"), Some("123")));
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    /// A legal bare database column name: a word character first, no
    /// interior whitespace. Anything else is assumed to be wrapped in quote
    /// characters.
    static ref COLUMN_NAME: Regex =
        Regex::new(r"^\w\S*[\w\d]*$").expect("column-name pattern is valid");
}

/// Is the value absent or the empty string?
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Negation of [`is_empty`].
pub fn is_not_empty(value: Option<&str>) -> bool {
    !is_empty(value)
}

/// Case-sensitive, null-safe suffix check.
///
/// Two absent values are considered equal, so `(None, None)` is true;
/// exactly one absent side is false.
///
/// ## Examples
///
/// ```
/// use grout::predicate::ends_with;
///
/// assert!(ends_with(None, None));
/// assert!(!ends_with(None, Some("abcdef")));
/// assert!(!ends_with(Some("def"), None));
/// assert!(ends_with(Some("abcdef"), Some("def")));
/// assert!(!ends_with(Some("def"), Some("ABCDEF")));
/// ```
pub fn ends_with(value: Option<&str>, suffix: Option<&str>) -> bool {
    ends_with_impl(value, suffix, false)
}

/// Case-insensitive variant of [`ends_with`]; the same null handling
/// applies.
pub fn ends_with_ignore_case(value: Option<&str>, suffix: Option<&str>) -> bool {
    ends_with_impl(value, suffix, true)
}

fn ends_with_impl(value: Option<&str>, suffix: Option<&str>, ignore_case: bool) -> bool {
    match (value, suffix) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(value), Some(suffix)) => {
            if ignore_case {
                value.to_lowercase().ends_with(&suffix.to_lowercase())
            } else {
                value.ends_with(suffix)
            }
        }
    }
}

/// Null-safe whole-string regex match.
///
/// An absent pattern or input is false. The pattern is anchored to the whole
/// input, so `"\d+"` matches `"123"` but not `"a123"`. An invalid pattern
/// is logged and treated as a non-match; this predicate never fails.
pub fn matches_pattern(pattern: Option<&str>, input: Option<&str>) -> bool {
    let (Some(pattern), Some(input)) = (pattern, input) else {
        return false;
    };
    match Regex::new(&format!(r"\A(?:{pattern})\z")) {
        Ok(compiled) => compiled.is_match(input),
        Err(error) => {
            warn!(%error, pattern, "invalid match pattern treated as non-match");
            false
        }
    }
}

/// Is the string NOT usable as a bare column name (i.e. quoted or otherwise
/// decorated)?
pub fn is_not_column_name(s: &str) -> bool {
    !COLUMN_NAME.is_match(s)
}

/// Strip the decoration from a quoted column name.
///
/// A string that already passes the bare-column check is returned as-is;
/// otherwise the first and last characters are assumed to be quote
/// characters and removed.
///
/// ## Examples
///
/// ```
/// use grout::predicate::get_target_column;
///
/// assert_eq!(get_target_column("name"), "name");
/// assert_eq!(get_target_column("\"name\""), "name");
/// assert_eq!(get_target_column("`order`"), "order");
/// ```
pub fn get_target_column(column: &str) -> &str {
    if is_not_column_name(column) {
        let mut inner = column.chars();
        inner.next();
        inner.next_back();
        inner.as_str()
    } else {
        column
    }
}
