//! Index-aware pattern substitution.
//!
//! This module provides the single-scan replacement engine that the SQL
//! placeholder filler is built on. Every non-overlapping match of a pattern
//! is handed to a caller-supplied replacer together with its zero-based
//! occurrence index, and the output is stitched together in one
//! left-to-right pass: untouched source slices are copied verbatim, matched
//! spans are replaced by whatever the replacer returns.
//!
//! Replacement text is never re-scanned against the pattern, so a
//! replacement that happens to look like a match cannot trigger recursive
//! expansion.
//!
//! ## Examples
//!
//! ```
//! use grout::substitute::substitute;
//! use regex::Regex;
//!
//! let digits = Regex::new(r"\d+").unwrap();
//! let result = substitute("a1b22c333", &digits, |_caps, occurrence| {
//!     format!("<{occurrence}>")
//! });
//! assert_eq!(result, "a<0>b<1>c<2>");
//! ```

use std::borrow::Cow;
use std::convert::Infallible;

use regex::{Captures, Regex};

/// Replace every match of `pattern` in `source` using a fallible replacer.
///
/// The replacer receives the full [`Captures`] for the match plus the
/// zero-based occurrence index of the match within this scan. The occurrence
/// index counts matches in discovery order; it is unrelated to anything
/// captured *inside* the match text.
///
/// ## Returns
///
/// - `Ok(Cow::Borrowed(source))` when the pattern matched nothing
/// - `Ok(Cow::Owned(..))` with the fully substituted string otherwise
/// - the replacer's error, unchanged, if it fails for any match; no partial
///   output is returned on that path
///
/// ## Examples
///
/// ```
/// use grout::substitute::try_substitute;
/// use regex::Regex;
///
/// let word = Regex::new(r"[a-z]+").unwrap();
/// let result: Result<_, String> = try_substitute("one, two", &word, |caps, _| {
///     let m = caps.get(0).unwrap().as_str();
///     Ok(m.to_uppercase())
/// });
/// assert_eq!(result.unwrap(), "ONE, TWO");
/// ```
pub fn try_substitute<'a, F, E>(
    source: &'a str,
    pattern: &Regex,
    mut replacer: F,
) -> Result<Cow<'a, str>, E>
where
    F: FnMut(&Captures<'_>, usize) -> Result<String, E>,
{
    let mut matches = pattern.captures_iter(source).enumerate().peekable();

    // Fast path: nothing to replace, hand the source back untouched.
    if matches.peek().is_none() {
        return Ok(Cow::Borrowed(source));
    }

    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for (occurrence, caps) in matches {
        let m = caps.get(0).expect("capture group 0 always exists");
        out.push_str(&source[last..m.start()]);
        out.push_str(&replacer(&caps, occurrence)?);
        last = m.end();
    }
    if last < source.len() {
        out.push_str(&source[last..]);
    }

    Ok(Cow::Owned(out))
}

/// Infallible variant of [`try_substitute`].
///
/// ## Examples
///
/// ```
/// use grout::substitute::substitute;
/// use regex::Regex;
///
/// let pattern = Regex::new(r"\{(\d+)}").unwrap();
/// let result = substitute("x = {0}", &pattern, |caps, _| {
///     // the captured digits are available independently of the occurrence
///     format!("${}", &caps[1])
/// });
/// assert_eq!(result, "x = $0");
/// ```
pub fn substitute<'a, F>(source: &'a str, pattern: &Regex, mut replacer: F) -> Cow<'a, str>
where
    F: FnMut(&Captures<'_>, usize) -> String,
{
    let result: Result<Cow<'a, str>, Infallible> =
        try_substitute(source, pattern, |caps, occurrence| Ok(replacer(caps, occurrence)));
    match result {
        Ok(done) => done,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits() -> Regex {
        Regex::new(r"\d+").unwrap()
    }

    #[test]
    fn test_no_match_returns_borrowed() {
        let result = substitute("hello world", &digits(), |_, _| unreachable!());
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_source() {
        let result = substitute("", &digits(), |_, _| unreachable!());
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_single_match_is_owned() {
        let result = substitute("abc123def", &digits(), |_, _| "#".to_string());
        assert_eq!(result, "abc#def");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_occurrence_index_counts_matches_in_scan_order() {
        let mut seen = Vec::new();
        let result = substitute("9 8 7", &digits(), |caps, occurrence| {
            seen.push((occurrence, caps[0].to_string()));
            occurrence.to_string()
        });
        assert_eq!(result, "0 1 2");
        assert_eq!(
            seen,
            vec![
                (0, "9".to_string()),
                (1, "8".to_string()),
                (2, "7".to_string())
            ]
        );
    }

    #[test]
    fn test_unmatched_segments_survive_verbatim() {
        let result = substitute("pre 1 mid 2 post", &digits(), |_, _| "X".to_string());
        assert_eq!(result, "pre X mid X post");
    }

    #[test]
    fn test_match_at_start_and_end() {
        let result = substitute("1 and 2", &digits(), |_, _| "n".to_string());
        assert_eq!(result, "n and n");

        let result = substitute("42", &digits(), |_, _| String::new());
        assert_eq!(result, "");
    }

    #[test]
    fn test_replacement_text_is_not_rescanned() {
        // Each replacement contains digits; a recursive engine would loop or
        // double-replace. One scan means exactly three substitutions.
        let result = substitute("1 2 3", &digits(), |_, _| "99".to_string());
        assert_eq!(result, "99 99 99");
    }

    #[test]
    fn test_replacer_error_propagates_without_partial_output() {
        let result: Result<Cow<'_, str>, &str> =
            try_substitute("1 2 3", &digits(), |caps, _| {
                if &caps[0] == "2" {
                    Err("boom")
                } else {
                    Ok("ok".to_string())
                }
            });
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn test_captured_value_distinct_from_occurrence() {
        let pattern = Regex::new(r"\{(?<idx>\d+)}").unwrap();
        let result = substitute("{5}{5}{0}", &pattern, |caps, occurrence| {
            format!("[slot={} occ={}]", &caps["idx"], occurrence)
        });
        assert_eq!(result, "[slot=5 occ=0][slot=5 occ=1][slot=0 occ=2]");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_zero_match_is_identity(source in "[a-z ]{0,64}") {
                let result = substitute(&source, &digits(), |_, _| unreachable!());
                prop_assert_eq!(result.as_ref(), source.as_str());
                prop_assert!(matches!(result, Cow::Borrowed(_)));
            }

            #[test]
            fn prop_length_accounting_holds(
                source in "[a-z0-9 ]{0,64}",
                replacement in "[a-z]{0,8}",
            ) {
                let pattern = digits();
                let matched: usize = pattern
                    .find_iter(&source)
                    .map(|m| m.as_str().len())
                    .sum();
                let count = pattern.find_iter(&source).count();

                let result = substitute(&source, &pattern, |_, _| replacement.clone());
                prop_assert_eq!(
                    result.len(),
                    source.len() - matched + count * replacement.len()
                );
            }
        }
    }
}
