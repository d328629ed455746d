//! Grammatically natural joining of item sequences.

use std::fmt::Display;

const EMPTY_PLACEHOLDER: &str = "<empty list>";

/// Join items into an "A, B, and C" string with an Oxford comma.
pub fn andjoin<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    conjoin(items, "and", |item| item.to_string(), true)
}

/// [`andjoin`] with a caller-chosen item formatter and Oxford-comma flag.
pub fn andjoin_with<I, F>(items: I, format_fn: F, oxford_comma: bool) -> String
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> String,
{
    conjoin(items, "and", format_fn, oxford_comma)
}

/// Join items into an "A, B, or C" string with an Oxford comma.
pub fn orjoin<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    conjoin(items, "or", |item| item.to_string(), true)
}

/// [`orjoin`] with a caller-chosen item formatter and Oxford-comma flag.
pub fn orjoin_with<I, F>(items: I, format_fn: F, oxford_comma: bool) -> String
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> String,
{
    conjoin(items, "or", format_fn, oxford_comma)
}

// The formatter runs exactly once per item, left to right.
fn conjoin<I, F>(items: I, conjunction: &str, mut format_fn: F, oxford_comma: bool) -> String
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> String,
{
    let mut rendered: Vec<String> = items.into_iter().map(|item| format_fn(&item)).collect();
    match rendered.len() {
        0 => EMPTY_PLACEHOLDER.to_string(),
        1 => rendered.remove(0),
        2 => format!("{} {} {}", rendered[0], conjunction, rendered[1]),
        _ => {
            let last = rendered.pop().unwrap_or_default();
            let comma = if oxford_comma { "," } else { "" };
            format!("{}{} {} {}", rendered.join(", "), comma, conjunction, last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn andjoin_cardinalities() {
        assert_eq!(andjoin(Vec::<&str>::new()), "<empty list>");
        assert_eq!(andjoin(["x"]), "x");
        assert_eq!(andjoin(["x", "y"]), "x and y");
        assert_eq!(andjoin(["x", "y", "z"]), "x, y, and z");
        assert_eq!(andjoin(["a", "b", "c", "d"]), "a, b, c, and d");
    }

    #[test]
    fn orjoin_cardinalities() {
        assert_eq!(orjoin(Vec::<&str>::new()), "<empty list>");
        assert_eq!(orjoin(["x"]), "x");
        assert_eq!(orjoin(["x", "y"]), "x or y");
        assert_eq!(orjoin(["x", "y", "z"]), "x, y, or z");
    }

    #[test]
    fn oxford_comma_can_be_dropped() {
        assert_eq!(
            andjoin_with(["x", "y", "z"], |s| s.to_string(), false),
            "x, y and z"
        );
        assert_eq!(
            orjoin_with(["x", "y", "z"], |s| s.to_string(), false),
            "x, y or z"
        );
        // two items never carry a comma either way
        assert_eq!(andjoin_with(["x", "y"], |s| s.to_string(), false), "x and y");
    }

    #[test]
    fn custom_formatter_applies_once_per_item_in_order() {
        let mut seen = Vec::new();
        let joined = andjoin_with([1, 2, 3], |n| {
            seen.push(*n);
            format!("#{n}")
        }, true);
        assert_eq!(joined, "#1, #2, and #3");
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn works_over_non_string_items() {
        assert_eq!(andjoin([1, 2]), "1 and 2");
        assert_eq!(orjoin(3..6), "3, 4, or 5");
    }
}
