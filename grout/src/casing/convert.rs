//! Identifier conversion between camelCase, underscore_case, and hyphen-case.
//!
//! `camel_to_underline` and `underline_to_camel` are single-pass
//! transformations. `camel_to_hyphen` handles mixed-convention input through
//! a two-stage pipeline: the identifier is first canonicalized to an
//! uppercase, underscore-delimited form, then re-rendered in hyphen-case.
//! Because the canonical form carries complete word-boundary information,
//! the second stage is pure formatting with no re-analysis.
//!
//! All converters return an empty string for empty input; none of them fail.

/// Convert a camelCase identifier to underscore_case.
///
/// Every uppercase letter after position 0 starts a new word, so acronyms
/// split per letter: `"URL"` becomes `"u_r_l"`. No acronym grouping is
/// performed.
///
/// ## Examples
///
/// ```
/// use grout::casing::camel_to_underline;
///
/// assert_eq!(camel_to_underline("userName"), "user_name");
/// assert_eq!(camel_to_underline("UserName"), "user_name");
/// assert_eq!(camel_to_underline("URL"), "u_r_l");
/// assert_eq!(camel_to_underline(""), "");
/// ```
pub fn camel_to_underline(param: &str) -> String {
    let mut out = String::with_capacity(param.len() + 4);
    for (i, c) in param.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Convert an underscore_case identifier to camelCase.
///
/// The whole input is lowercased first, then each `_` is dropped and the
/// character after it uppercased. A trailing `_` with nothing after it is
/// dropped silently.
///
/// ## Examples
///
/// ```
/// use grout::casing::underline_to_camel;
///
/// assert_eq!(underline_to_camel("user_name"), "userName");
/// assert_eq!(underline_to_camel("USER_NAME"), "userName");
/// assert_eq!(underline_to_camel("user_"), "user");
/// ```
pub fn underline_to_camel(param: &str) -> String {
    let lowered = param.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut chars = lowered.chars();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a camelCase (or mixed-convention) identifier to hyphen-case.
///
/// Input may mix camel humps, underscores, dots, hyphens, and whitespace;
/// everything is normalized through an uppercase underscore-delimited
/// canonical form before rendering. Consecutive uppercase letters do NOT
/// start new words - only a lowercase-to-uppercase transition does - so
/// `"HTTPServer"` collapses to `"httpserver"`. Already-hyphenated lowercase
/// input maps to itself.
///
/// ## Examples
///
/// ```
/// use grout::casing::camel_to_hyphen;
///
/// assert_eq!(camel_to_hyphen("managerAdminUserService"), "manager-admin-user-service");
/// assert_eq!(camel_to_hyphen("foo.bar_baz"), "foo-bar-baz");
/// assert_eq!(camel_to_hyphen("already-hyphen"), "already-hyphen");
/// ```
pub fn camel_to_hyphen(input: &str) -> String {
    constant_case_to_hyphen(&to_constant_case(input))
}

/// `.`, `_`, and `-` all act as word boundaries in the canonical form.
fn is_boundary_char(c: char) -> bool {
    c == '.' || c == '_' || c == '-'
}

/// Stage 1 of [`camel_to_hyphen`]: canonicalize to an uppercase,
/// underscore-delimited form.
///
/// Walks the input with the previous character tracked across iterations.
/// A separator is emitted before the current character when the last
/// emitted character is not already a separator AND the previous character
/// was whitespace or the transition is lowercase-to-uppercase; a
/// digit-to-letter transition also separates. Boundary characters collapse
/// to a single `_`, whitespace is dropped (trailing whitespace leaves one
/// trailing `_`), and every retained letter is uppercased.
fn to_constant_case(input: &str) -> String {
    let mut buf = String::with_capacity(input.len() + 8);
    let mut previous = ' ';
    for c in input.chars() {
        let upper_after_lower = previous.is_lowercase() && c.is_uppercase();
        let previous_is_whitespace = previous.is_whitespace();
        let last_is_not_separator = !buf.is_empty() && !buf.ends_with('_');

        if last_is_not_separator && (upper_after_lower || previous_is_whitespace) {
            buf.push('_');
        } else if previous.is_ascii_digit() && c.is_alphabetic() {
            buf.push('_');
        }
        if is_boundary_char(c) {
            if last_is_not_separator {
                buf.push('_');
            }
        } else if !c.is_whitespace() {
            buf.extend(c.to_uppercase());
        }
        previous = c;
    }
    if previous.is_whitespace() {
        buf.push('_');
    }
    buf
}

/// Stage 2 of [`camel_to_hyphen`]: render the canonical form in
/// hyphen-case. Pure formatting: boundary markers map to `-`, letters are
/// lowercased, consecutive boundaries never double up, and a leading
/// boundary is dropped.
fn constant_case_to_hyphen(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    for c in input.chars() {
        if is_boundary_char(c) {
            if !buf.is_empty() && !buf.ends_with('-') {
                buf.push('-');
            }
        } else if !c.is_whitespace() {
            buf.extend(c.to_lowercase());
        }
    }
    buf
}

/// Uppercase the first character if it is lowercase; everything else is
/// returned untouched.
///
/// ## Examples
///
/// ```
/// use grout::casing::upper_first;
///
/// assert_eq!(upper_first("name"), "Name");
/// assert_eq!(upper_first("Name"), "Name");
/// assert_eq!(upper_first(""), "");
/// ```
pub fn upper_first(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = String::with_capacity(src.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => src.to_string(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
///
/// ## Examples
///
/// ```
/// use grout::casing::first_char_to_lower;
///
/// assert_eq!(first_char_to_lower("UserService"), "userService");
/// assert_eq!(first_char_to_lower("UserServiceImpl"), "userServiceImpl");
/// ```
pub fn first_char_to_lower(raw: &str) -> String {
    prefix_to_lower(raw, 1)
}

/// Lowercase the first `count` characters, leaving the rest untouched.
/// A `count` past the end of the string lowercases the whole string.
pub fn prefix_to_lower(raw: &str, count: usize) -> String {
    let split = raw
        .char_indices()
        .nth(count)
        .map(|(offset, _)| offset)
        .unwrap_or(raw.len());
    let (head, tail) = raw.split_at(split);
    let mut out = head.to_lowercase();
    out.push_str(tail);
    out
}

/// Drop the first `count` characters, then lowercase the new first
/// character.
///
/// ## Examples
///
/// ```
/// use grout::casing::remove_prefix_after_prefix_to_lower;
///
/// assert_eq!(remove_prefix_after_prefix_to_lower("isUser", 2), "user");
/// assert_eq!(remove_prefix_after_prefix_to_lower("isUserInfo", 2), "userInfo");
/// ```
pub fn remove_prefix_after_prefix_to_lower(raw: &str, count: usize) -> String {
    let split = raw
        .char_indices()
        .nth(count)
        .map(|(offset, _)| offset)
        .unwrap_or(raw.len());
    first_char_to_lower(&raw[split..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_camel_to_underline() {
        assert_eq!(camel_to_underline("userName"), "user_name");
        assert_eq!(camel_to_underline("managerAdminUserService"), "manager_admin_user_service");
    }

    #[test]
    fn test_camel_to_underline_leading_uppercase_has_no_leading_separator() {
        assert_eq!(camel_to_underline("UserName"), "user_name");
    }

    #[test]
    fn test_camel_to_underline_splits_acronyms_per_letter() {
        assert_eq!(camel_to_underline("URL"), "u_r_l");
    }

    #[test]
    fn test_camel_to_underline_empty() {
        assert_eq!(camel_to_underline(""), "");
    }

    #[test]
    fn test_underline_to_camel() {
        assert_eq!(underline_to_camel("user_name"), "userName");
        assert_eq!(underline_to_camel("manager_admin_user_service"), "managerAdminUserService");
    }

    #[test]
    fn test_underline_to_camel_lowercases_first() {
        assert_eq!(underline_to_camel("USER_NAME"), "userName");
    }

    #[test]
    fn test_underline_to_camel_trailing_underscore_dropped() {
        assert_eq!(underline_to_camel("user_"), "user");
    }

    #[test]
    fn test_underline_to_camel_consecutive_underscores() {
        // the second underscore is consumed as the "next" character
        assert_eq!(underline_to_camel("a__b"), "a_b");
    }

    #[test]
    fn test_round_trip_on_plain_camel_identifiers() {
        for ident in ["userName", "managerAdminUserService", "a", "lower"] {
            assert_eq!(
                underline_to_camel(&camel_to_underline(ident)),
                first_char_to_lower(ident)
            );
        }
    }

    #[test]
    fn test_camel_to_hyphen() {
        assert_eq!(camel_to_hyphen("managerAdminUserService"), "manager-admin-user-service");
    }

    #[test]
    fn test_camel_to_hyphen_mixed_separators() {
        assert_eq!(camel_to_hyphen("manager-adminUser_service"), "manager-admin-user-service");
        assert_eq!(camel_to_hyphen("foo.bar_baz"), "foo-bar-baz");
    }

    #[test]
    fn test_camel_to_hyphen_collapses_separator_runs() {
        assert_eq!(camel_to_hyphen("foo--bar__baz"), "foo-bar-baz");
    }

    #[test]
    fn test_camel_to_hyphen_whitespace_becomes_boundary() {
        assert_eq!(camel_to_hyphen("foo bar"), "foo-bar");
        assert_eq!(camel_to_hyphen("foo  bar"), "foo-bar");
        // trailing whitespace leaves a trailing boundary
        assert_eq!(camel_to_hyphen("foo "), "foo-");
    }

    #[test]
    fn test_camel_to_hyphen_digit_to_letter_boundary() {
        assert_eq!(camel_to_hyphen("abc1def"), "abc1-def");
    }

    #[test]
    fn test_camel_to_hyphen_acronym_quirk() {
        // Consecutive uppercase letters never trigger a boundary; only the
        // lowercase-to-uppercase transition does. Known quirk, kept on
        // purpose: the acronym fuses with the following word.
        assert_eq!(camel_to_hyphen("HTTPServer"), "httpserver");
    }

    #[test]
    fn test_camel_to_hyphen_idempotent() {
        let once = camel_to_hyphen("managerAdminUserService");
        assert_eq!(camel_to_hyphen(&once), once);
        assert_eq!(camel_to_hyphen("already-hyphen"), "already-hyphen");
    }

    #[test]
    fn test_camel_to_hyphen_empty() {
        assert_eq!(camel_to_hyphen(""), "");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("name"), "Name");
        assert_eq!(upper_first("Name"), "Name");
        assert_eq!(upper_first("n"), "N");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_first_char_to_lower() {
        assert_eq!(first_char_to_lower("UserService"), "userService");
        assert_eq!(first_char_to_lower("UserServiceImpl"), "userServiceImpl");
        assert_eq!(first_char_to_lower(""), "");
    }

    #[test]
    fn test_prefix_to_lower() {
        assert_eq!(prefix_to_lower("ABCdef", 2), "abCdef");
        assert_eq!(prefix_to_lower("AB", 5), "ab");
    }

    #[test]
    fn test_remove_prefix_after_prefix_to_lower() {
        assert_eq!(remove_prefix_after_prefix_to_lower("isUser", 2), "user");
        assert_eq!(remove_prefix_after_prefix_to_lower("isUserInfo", 2), "userInfo");
    }
}
