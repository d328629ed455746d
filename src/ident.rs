//! Identifier sanitizing and CamelCase conversion.

use lazy_static::lazy_static;
use log::debug;
use regex::{NoExpand, Regex};

use crate::error::{FormatError, FormatResult};

lazy_static! {
    static ref UNSAFE_IDENT_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
}

/// Replace every character outside `[A-Za-z0-9_]` with an underscore.
///
/// Pure one-for-one substitution; the result is not validated (it may be
/// empty or start with a digit).
pub fn make_safe_identifier(value: &str) -> String {
    make_safe_identifier_with(value, "_")
}

/// Like [`make_safe_identifier`], with a caller-chosen replacement. The
/// replacement is taken literally.
pub fn make_safe_identifier_with(value: &str, replace_with: &str) -> String {
    UNSAFE_IDENT_CHARS
        .replace_all(value, NoExpand(replace_with))
        .into_owned()
}

/// Convert a CamelCase string to snake_case.
pub fn camel_to_lower(value: &str) -> FormatResult<String> {
    camel_to_lower_with(value, "_")
}

/// Convert a CamelCase string to lower case with a caller-chosen divider.
///
/// The first character is lowercased unconditionally. After that, lowercase
/// letters and digits pass through, each uppercase letter marks a word
/// boundary (divider plus lowercased letter), and anything else is a
/// validation error naming the offending character.
pub fn camel_to_lower_with(value: &str, divider: &str) -> FormatResult<String> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let mut out = String::with_capacity(value.len() + divider.len() * 2);
    out.extend(first.to_lowercase());
    for ch in chars {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else if ch.is_ascii_uppercase() {
            // word boundary
            out.push_str(divider);
            out.push(ch.to_ascii_lowercase());
        } else {
            debug!("rejecting non-CamelCase input {value:?} at {ch:?}");
            return Err(FormatError::NotCamelCase {
                input: value.to_string(),
                found: ch,
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_identifier_replaces_each_disallowed_char() {
        assert_eq!(make_safe_identifier("a b-c!"), "a_b_c_");
        assert_eq!(make_safe_identifier("already_safe_9"), "already_safe_9");
    }

    #[test]
    fn safe_identifier_custom_replacement_is_literal() {
        assert_eq!(make_safe_identifier_with("a b", "x"), "axb");
        // no capture-group expansion
        assert_eq!(make_safe_identifier_with("a b", "$0"), "a$0b");
    }

    #[test]
    fn camel_to_lower_basic() {
        assert_eq!(camel_to_lower("CamelCase").unwrap(), "camel_case");
        assert_eq!(camel_to_lower("XYZ").unwrap(), "x_y_z");
        assert_eq!(camel_to_lower("already").unwrap(), "already");
    }

    #[test]
    fn camel_to_lower_keeps_digits() {
        assert_eq!(camel_to_lower("Sp3Carbon").unwrap(), "sp3_carbon");
    }

    #[test]
    fn camel_to_lower_custom_divider() {
        assert_eq!(camel_to_lower_with("CamelCase", "-").unwrap(), "camel-case");
    }

    #[test]
    fn camel_to_lower_rejects_other_characters() {
        let err = camel_to_lower("Bad Name").unwrap_err();
        assert_eq!(
            err,
            FormatError::NotCamelCase {
                input: "Bad Name".to_string(),
                found: ' ',
            }
        );
        assert!(camel_to_lower("Bad-Name").is_err());
        assert!(camel_to_lower("Schrödinger").is_err());
    }

    #[test]
    fn camel_to_lower_empty_input() {
        assert_eq!(camel_to_lower("").unwrap(), "");
    }
}
