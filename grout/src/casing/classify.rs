//! Casing classification predicates.
//!
//! These answer the "what convention is this identifier already in?"
//! questions the mapping layer asks before deciding whether a conversion is
//! needed at all.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// ALL_CAPS-with-separators naming: nothing but digits, uppercase ASCII
    /// letters, `/`, and `_` (e.g. `USER_NAME`, `A/B_TEST`).
    static ref CAPITAL_MODE: Regex =
        Regex::new(r"^[0-9A-Z/_]+$").expect("capital-mode pattern is valid");
}

/// Is the identifier lower camelCase?
///
/// Anything containing `_` is not camel, and neither is an identifier whose
/// first character is not lowercase. Empty input is not camel.
///
/// ## Examples
///
/// ```
/// use grout::casing::is_camel;
///
/// assert!(is_camel("userName"));
/// assert!(!is_camel("UserName"));
/// assert!(!is_camel("user_name"));
/// ```
pub fn is_camel(s: &str) -> bool {
    if s.contains('_') {
        return false;
    }
    s.chars().next().is_some_and(char::is_lowercase)
}

/// Is the identifier in ALL_CAPS-with-separators form?
pub fn is_capital_mode(word: &str) -> bool {
    CAPITAL_MODE.is_match(word)
}

/// Does the identifier mix camel humps with `/` or `_` separators?
///
/// ## Examples
///
/// ```
/// use grout::casing::is_mixed_mode;
///
/// assert!(is_mixed_mode("user_Name"));
/// assert!(!is_mixed_mode("userName"));
/// assert!(!is_mixed_mode("user_name"));
/// ```
pub fn is_mixed_mode(word: &str) -> bool {
    contains_upper_case(word) && word.chars().any(|c| c == '/' || c == '_')
}

/// Does the string contain at least one uppercase character?
pub fn contains_upper_case(word: &str) -> bool {
    word.chars().any(char::is_uppercase)
}

/// Does the string contain at least one lowercase character?
pub fn contains_lower_case(word: &str) -> bool {
    word.chars().any(char::is_lowercase)
}
