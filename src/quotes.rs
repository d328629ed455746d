//! Removal of one layer of matching quote characters.

/// Strip one layer of matching single or double quotes.
///
/// Tries `'` then `"`; if both the first and last character equal the same
/// candidate, the pair is removed. Anything else is returned unchanged, so
/// the function is a fixed point on already-unquoted input.
///
/// Callers must pass at least two characters; a one-character quote slices
/// out of bounds.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(stripped) = strip_matching(value, quote) {
            return stripped;
        }
    }
    value
}

/// Like [`strip_quotes`], but with a single caller-chosen quote character.
pub fn strip_quotes_with(value: &str, quote: char) -> &str {
    strip_matching(value, quote).unwrap_or(value)
}

fn strip_matching(value: &str, quote: char) -> Option<&str> {
    if value.starts_with(quote) && value.ends_with(quote) {
        let w = quote.len_utf8();
        Some(&value[w..value.len() - w])
    } else {
        None
    }
}
