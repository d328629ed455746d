//! Bare type names from rendered type strings.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches the quoted inner name of a `<... 'Name'>` style rendering.
    static ref TYPE_REPR: Regex = Regex::new(r"^<.*'(.+)'>$").unwrap();
}

/// Reduce a rendered type string to its bare name.
///
/// Strips a `<... 'Name'>` wrapper if one is present, then keeps only the
/// final path segment (both `::` and `.` count as path separators).
/// Malformed input degrades to an unexpected but non-crashing string.
pub fn classname(raw: &str) -> String {
    let inner = TYPE_REPR
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw);
    tail_segment(inner).to_string()
}

/// Bare name of a value's runtime type.
///
/// Covers the class-object case as well: call it on any value of the type,
/// or name the type explicitly via the turbofish.
pub fn classname_of<T: ?Sized>(_value: &T) -> String {
    classname(std::any::type_name::<T>())
}

fn tail_segment(path: &str) -> &str {
    let after_modules = path.rsplit("::").next().unwrap_or(path);
    after_modules.rsplit('.').next().unwrap_or(after_modules)
}
