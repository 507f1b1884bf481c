//! Lexical validators for scene tokens.
//!
//! These are pure predicates over token text:
//!
//! | predicate                     | accepted language          |
//! |-------------------------------|----------------------------|
//! | [`is_valid_identifier`]       | `[A-Za-z_][A-Za-z0-9_]*`   |
//! | [`is_valid_integer`]          | `-?(0\|[1-9][0-9]*)`       |
//! | [`is_valid_positive_integer`] | `[1-9][0-9]*`              |
//!
//! Note that `-0` is a valid integer.

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `token` is a valid building or antenna identifier.
///
/// # Examples
///
/// ```
/// use kover_parser::lexical::is_valid_identifier;
///
/// assert!(is_valid_identifier("_tower2"));
/// assert!(!is_valid_identifier("2tower"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_continue)
}

/// Returns `true` if `token` is a signed integer without leading zeros.
///
/// # Examples
///
/// ```
/// use kover_parser::lexical::is_valid_integer;
///
/// assert!(is_valid_integer("-42"));
/// assert!(is_valid_integer("0"));
/// assert!(is_valid_integer("-0"));
/// assert!(!is_valid_integer("01"));
/// assert!(!is_valid_integer("-"));
/// ```
pub fn is_valid_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    digits == "0" || is_valid_positive_integer(digits)
}

/// Returns `true` if `token` is a strictly positive integer without sign or
/// leading zeros.
///
/// # Examples
///
/// ```
/// use kover_parser::lexical::is_valid_positive_integer;
///
/// assert!(is_valid_positive_integer("10"));
/// assert!(!is_valid_positive_integer("0"));
/// assert!(!is_valid_positive_integer("-3"));
/// ```
pub fn is_valid_positive_integer(token: &str) -> bool {
    let bytes = token.as_bytes();
    matches!(bytes.first(), Some(b'1'..=b'9')) && bytes.iter().all(u8::is_ascii_digit)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Short strings over an alphabet that exercises signs, zeros and stray characters.
    fn numeric_like_strategy() -> impl Strategy<Value = String> {
        "[-+0-9a ]{0,12}"
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Valid integers are exactly the canonical decimal renderings, plus `-0`.
    fn check_integer_matches_canonical_form(token: &str) -> Result<(), TestCaseError> {
        let canonical = token
            .parse::<i128>()
            .is_ok_and(|value| value.to_string() == token);
        prop_assert_eq!(is_valid_integer(token), canonical || token == "-0");
        Ok(())
    }

    /// Valid positive integers are exactly the canonical renderings of values above zero.
    fn check_positive_integer_matches_canonical_form(token: &str) -> Result<(), TestCaseError> {
        let canonical = token
            .parse::<u128>()
            .is_ok_and(|value| value > 0 && value.to_string() == token);
        prop_assert_eq!(is_valid_positive_integer(token), canonical);
        Ok(())
    }

    fn check_identifier_pattern_accepted(token: &str) -> Result<(), TestCaseError> {
        prop_assert!(is_valid_identifier(token));
        Ok(())
    }

    fn check_identifier_rejected(token: &str) -> Result<(), TestCaseError> {
        prop_assert!(!is_valid_identifier(token));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn integer_matches_canonical_form(token in numeric_like_strategy()) {
            check_integer_matches_canonical_form(&token)?;
        }

        #[test]
        fn positive_integer_matches_canonical_form(token in numeric_like_strategy()) {
            check_positive_integer_matches_canonical_form(&token)?;
        }

        #[test]
        fn identifier_pattern_accepted(token in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
            check_identifier_pattern_accepted(&token)?;
        }

        #[test]
        fn identifier_with_bad_start_rejected(token in "[-0-9.][A-Za-z0-9_]{0,15}") {
            check_identifier_rejected(&token)?;
        }

        #[test]
        fn identifier_with_bad_char_rejected(token in "[A-Za-z_]{1,5}[-.+ #][A-Za-z0-9_]{0,5}") {
            check_identifier_rejected(&token)?;
        }
    }
}
