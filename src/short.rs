//! Optional abbreviated renderings of displayable values.

use std::fmt;

/// Optional abbreviated-rendering capability.
///
/// Implementors with a compact form override [`fmt_short`]; the default
/// falls back to the full `Display` form, so implementing the trait with
/// an empty body is enough to opt a type in.
///
/// [`fmt_short`]: ShortDisplay::fmt_short
pub trait ShortDisplay: fmt::Display {
    fn fmt_short(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Abbreviated string form of a value, falling back to its `Display` form.
pub fn short_str<T: ShortDisplay + ?Sized>(value: &T) -> String {
    struct Short<'a, T: ?Sized>(&'a T);

    impl<T: ShortDisplay + ?Sized> fmt::Display for Short<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_short(f)
        }
    }

    Short(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Orbital {
        shell: u32,
        label: &'static str,
    }

    impl fmt::Display for Orbital {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "orbital {}{}", self.shell, self.label)
        }
    }

    struct Verbose(&'static str);

    impl fmt::Display for Verbose {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a very long rendering of {}", self.0)
        }
    }

    impl ShortDisplay for Orbital {
        fn fmt_short(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}{}", self.shell, self.label)
        }
    }

    // opted in, but keeps the Display fallback
    impl ShortDisplay for Verbose {}

    #[test]
    fn uses_abbreviated_form_when_provided() {
        let orbital = Orbital { shell: 2, label: "p" };
        assert_eq!(short_str(&orbital), "2p");
        assert_eq!(orbital.to_string(), "orbital 2p");
    }

    #[test]
    fn falls_back_to_display() {
        assert_eq!(short_str(&Verbose("x")), "a very long rendering of x");
    }
}
