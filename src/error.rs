use derive_more::Display;
use thiserror::Error;

/// Which of the two glyph alphabets a conversion was targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScriptPosition {
    #[display("superscript")]
    Superscript,
    #[display("subscript")]
    Subscript,
}

/// Errors raised by the formatting helpers.
///
/// Nothing here is caught or retried inside the crate; every error
/// propagates straight to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Superscript/subscript input that is not a whole number.
    #[error("only integer values can be written in {script}: {value:?}")]
    NotIntegral {
        script: ScriptPosition,
        value: String,
    },

    /// Reserved complex-number marker `i` in a superscript. Complex
    /// exponents have a glyph path set aside but no implementation.
    #[error("complex values are not supported in superscripts: {0:?}")]
    ComplexUnsupported(String),

    /// camel_to_lower met a character outside `[a-zA-Z0-9]`.
    #[error("string {input:?} is not proper CamelCase: contains {found:?}")]
    NotCamelCase { input: String, found: char },
}

pub type FormatResult<T> = Result<T, FormatError>;
