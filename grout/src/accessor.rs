//! Java-bean accessor name guessing.
//!
//! Getter names follow the JavaBeans convention: boolean properties read
//! through `isFoo()`, everything else through `getFoo()`. Whether a property
//! is boolean-typed is decided by reflective type inspection that lives
//! outside this crate; callers evaluate that predicate themselves and pass
//! the result in as `is_boolean`.

use crate::casing::{first_char_to_lower, upper_first};

/// The prefix boolean accessors carry.
const IS: &str = "is";

/// Guess the getter name for a property.
///
/// Boolean properties already prefixed with `is` are returned as-is; other
/// boolean properties get `is` + capitalized name; everything else gets
/// `get` + capitalized name.
///
/// ## Examples
///
/// ```
/// use grout::accessor::guess_getter_name;
///
/// assert_eq!(guess_getter_name("name", false), "getName");
/// assert_eq!(guess_getter_name("active", true), "isActive");
/// assert_eq!(guess_getter_name("isActive", true), "isActive");
/// ```
pub fn guess_getter_name(name: &str, is_boolean: bool) -> String {
    if is_boolean {
        if name.starts_with(IS) {
            name.to_string()
        } else {
            format!("{IS}{}", upper_first(name))
        }
    } else {
        format!("get{}", upper_first(name))
    }
}

/// Strip the `is` prefix from a boolean property name.
///
/// Only acts when the property is boolean-typed AND the name starts with
/// `is`. The remainder is returned with its first character lowercased;
/// if the remainder is empty, or was already in lower-camel form after the
/// prefix (meaning the `is` was part of the word, not a prefix), the
/// original name is returned untouched.
///
/// The removal replaces the first occurrence of the literal `is`; the
/// `starts_with` gate guarantees that occurrence is the prefix.
///
/// ## Examples
///
/// ```
/// use grout::accessor::remove_is_prefix_if_boolean;
///
/// assert_eq!(remove_is_prefix_if_boolean("isActive", true), "active");
/// assert_eq!(remove_is_prefix_if_boolean("issue", true), "issue");
/// assert_eq!(remove_is_prefix_if_boolean("isActive", false), "isActive");
/// ```
pub fn remove_is_prefix_if_boolean(name: &str, is_boolean: bool) -> String {
    if is_boolean && name.starts_with(IS) {
        let property = name.replacen(IS, "", 1);
        if property.is_empty() {
            return name.to_string();
        }
        let lowered = first_char_to_lower(&property);
        if property == lowered {
            // no capitalized word followed the prefix: "is" was not acting
            // as an accessor prefix here
            name.to_string()
        } else {
            lowered
        }
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guess_getter_name_non_boolean() {
        assert_eq!(guess_getter_name("name", false), "getName");
        assert_eq!(guess_getter_name("Name", false), "getName");
        assert_eq!(guess_getter_name("userName", false), "getUserName");
    }

    #[test]
    fn test_guess_getter_name_boolean() {
        assert_eq!(guess_getter_name("active", true), "isActive");
        assert_eq!(guess_getter_name("isActive", true), "isActive");
    }

    #[test]
    fn test_guess_getter_name_boolean_prefix_not_normalized() {
        // "issue" starts with "is", so it is taken as already prefixed
        assert_eq!(guess_getter_name("issue", true), "issue");
    }

    #[test]
    fn test_remove_is_prefix() {
        assert_eq!(remove_is_prefix_if_boolean("isActive", true), "active");
        assert_eq!(remove_is_prefix_if_boolean("isUserInfo", true), "userInfo");
    }

    #[test]
    fn test_remove_is_prefix_requires_boolean_type() {
        assert_eq!(remove_is_prefix_if_boolean("isActive", false), "isActive");
        assert_eq!(remove_is_prefix_if_boolean("active", true), "active");
    }

    #[test]
    fn test_remove_is_prefix_keeps_embedded_is_words() {
        // the remainder "sue" is already lowercase, so "is" was part of the
        // word itself
        assert_eq!(remove_is_prefix_if_boolean("issue", true), "issue");
    }

    #[test]
    fn test_remove_is_prefix_bare_is() {
        assert_eq!(remove_is_prefix_if_boolean("is", true), "is");
    }
}
