//! Error types for JSON parsing.

use thiserror::Error;

/// Result type for JSON parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for JSON parsing.
///
/// Every variant is terminal: the first failure aborts the whole parse and no
/// partial value is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No text supplied.
    #[error("No content provided")]
    EmptyInput,

    /// Document does not begin with `[` or `{`.
    #[error("JSON must start with an array or object")]
    InvalidRoot,

    /// Non-whitespace content follows the root value.
    #[error("JSON contains extra characters after closing")]
    TrailingContent,

    /// Separator `,` missing between elements or members.
    #[error("JSON expected ','")]
    ExpectedComma,

    /// Separator `:` missing after an object key.
    #[error("JSON expected ':'")]
    ExpectedColon,

    /// Object member does not start with a string key.
    #[error("JSON expected string key")]
    ExpectedKey,

    /// A value was required and no production matched.
    #[error("JSON missing value")]
    MissingValue,

    /// Input ended inside a string literal.
    #[error("JSON missing closing quote")]
    UnterminatedString,

    /// Input ended inside an array.
    #[error("JSON missing closing array")]
    UnterminatedArray,

    /// Input ended inside an object.
    #[error("JSON missing closing object")]
    UnterminatedObject,

    /// Raw tab inside a string literal.
    #[error("JSON tab character in string")]
    TabInString,

    /// Raw newline inside a string literal.
    #[error("JSON new line character in string")]
    NewlineInString,

    /// Any other raw control character inside a string literal.
    #[error("JSON control character U+{0:04X} in string")]
    ControlCharInString(u32),

    /// Backslash followed by an unknown escape letter.
    #[error("JSON illegal backslash")]
    IllegalBackslash,

    /// `\u` not followed by four hex digits.
    #[error("JSON illegal Unicode escape sequence")]
    InvalidUnicodeEscape,

    /// Numeric literal that does not convert.
    #[error("JSON invalid number")]
    InvalidNumber,

    /// Nesting went past the configured maximum.
    #[error("JSON nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),

    /// Read past the end of the input.
    ///
    /// Open containers turn this into [`ParseError::UnterminatedArray`] or
    /// [`ParseError::UnterminatedObject`].
    #[error("JSON unexpected end of input")]
    UnexpectedEnd,
}
