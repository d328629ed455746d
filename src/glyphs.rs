//! Unicode superscript and subscript renderings of integer values.

use std::fmt::Display;

use log::debug;

use crate::error::{FormatError, FormatResult, ScriptPosition};

const SUPERSCRIPT_DIGITS: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}',
];
const SUPERSCRIPT_MINUS: char = '\u{207B}';
const SUPERSCRIPT_PLUS: char = '\u{207A}';

const SUBSCRIPT_DIGITS: [char; 10] = [
    '\u{2080}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2084}', '\u{2085}', '\u{2086}', '\u{2087}',
    '\u{2088}', '\u{2089}',
];
const SUBSCRIPT_MINUS: char = '\u{208B}';
const SUBSCRIPT_PLUS: char = '\u{208A}';

/// Render an integer-valued input as Unicode superscript glyphs.
///
/// Accepts anything whose `Display` form is an optionally signed run of
/// digits; whole floats render that way, fractional ones do not. Digits
/// and signs map to their dedicated code points; the complex marker `i`
/// is reserved but not implemented; every other character is dropped.
pub fn superscript<T: Display>(value: T) -> FormatResult<String> {
    let rendered = value.to_string();
    ensure_integral(&rendered, ScriptPosition::Superscript)?;

    let mut out = String::with_capacity(rendered.len() * 3);
    for ch in rendered.chars() {
        match ch {
            '-' => out.push(SUPERSCRIPT_MINUS),
            '+' => out.push(SUPERSCRIPT_PLUS),
            'i' => return Err(FormatError::ComplexUnsupported(rendered.clone())),
            _ => {
                if let Some(d) = ch.to_digit(10) {
                    out.push(SUPERSCRIPT_DIGITS[d as usize]);
                }
            }
        }
    }
    Ok(out)
}

/// Render an integer-valued input as Unicode subscript glyphs.
///
/// Same validation as [`superscript`]; unrecognized characters are
/// silently dropped, with no reserved complex path.
pub fn subscript<T: Display>(value: T) -> FormatResult<String> {
    let rendered = value.to_string();
    ensure_integral(&rendered, ScriptPosition::Subscript)?;

    let mut out = String::with_capacity(rendered.len() * 3);
    for ch in rendered.chars() {
        match ch {
            '-' => out.push(SUBSCRIPT_MINUS),
            '+' => out.push(SUBSCRIPT_PLUS),
            _ => {
                if let Some(d) = ch.to_digit(10) {
                    out.push(SUBSCRIPT_DIGITS[d as usize]);
                }
            }
        }
    }
    Ok(out)
}

/// Whole-number check on the rendered form: an optional sign followed by
/// digits only. Whole floats render without a fraction and pass; anything
/// carrying a decimal point or exponent is rejected.
fn ensure_integral(rendered: &str, script: ScriptPosition) -> FormatResult<()> {
    let digits = rendered.strip_prefix(['+', '-']).unwrap_or(rendered);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(());
    }
    debug!("rejecting non-integral {script} input: {rendered:?}");
    Err(FormatError::NotIntegral {
        script,
        value: rendered.to_string(),
    })
}
