//! A variety of utility functions which create, modify, or are in some way
//! related to strings and text.
//!
//! Every helper is a pure, synchronous transformation with no shared state,
//! safe to call from any number of threads without coordination. Fallible
//! conversions return [`FormatResult`]; nothing is caught or retried
//! internally.

pub mod error;
pub mod glyphs;
pub mod ident;
pub mod join;
pub mod layout;
pub mod quotes;
pub mod short;
pub mod typename;

pub use error::{FormatError, FormatResult, ScriptPosition};
pub use glyphs::{subscript, superscript};
pub use ident::{
    camel_to_lower, camel_to_lower_with, make_safe_identifier, make_safe_identifier_with,
};
pub use join::{andjoin, andjoin_with, orjoin, orjoin_with};
pub use layout::{Banner, indented, indented_by, simple_banner};
pub use quotes::{strip_quotes, strip_quotes_with};
pub use short::{ShortDisplay, short_str};
pub use typename::{classname, classname_of};

// Alias names bound to the identical behavior; callers may use either.
pub use layout::indented as indent;
pub use short::short_str as shortstr;
