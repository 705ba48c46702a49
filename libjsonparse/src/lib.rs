//! Strict JSON parser.
//!
//! Validates text against the JSON grammar and builds an order-preserving
//! [`Value`] tree, or rejects the input with the first [`ParseError`]
//! encountered.
//!
//! # Parsing Pipeline
//!
//! A single forward pass over the input, coordinated through one cursor:
//!
//! 1. **Driver**: Rejects empty input and any root that is not an array or
//!    object, then rejects trailing non-whitespace after the root.
//!
//! 2. **Dispatcher**: At every value position, tries string, number, object,
//!    array, `true`, `false`, `null` in that order.
//!
//! 3. **Containers**: Arrays and objects are tracked on an explicit frame
//!    stack, so deeply nested documents do not consume call stack.
//!
//! Whole-valued numbers collapse to [`Value::Integer`] regardless of how they
//! were written (`3.0` and `1e3` are integers); anything else is
//! [`Value::Float`].

mod cursor;
mod error;
mod keyword;
mod lexical;
mod number;
mod options;
mod parser;
mod string;
mod value;

pub use error::{ParseError, Result};
pub use options::{EscapeStyle, ParseOptions};
pub use value::{Map, Value};

use tracing::debug;

/// Parse a JSON document from a string.
///
/// # Example
///
/// ```
/// use libjsonparse::{parse, Value};
///
/// let value = parse(r#"{"a": [1, true]}"#).unwrap();
/// let items = value.as_object().unwrap()["a"].as_array().unwrap();
/// assert_eq!(items[1], Value::Bool(true));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a JSON document from a string with explicit options.
///
/// # Example
///
/// ```
/// use libjsonparse::{parse_with_options, EscapeStyle, ParseOptions};
///
/// let options = ParseOptions::new().with_escapes(EscapeStyle::Letter);
/// let value = parse_with_options(r#"["a\nb"]"#, &options).unwrap();
/// assert_eq!(value.as_array().unwrap()[0].as_str(), Some("anb"));
/// ```
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    debug!(len = input.len(), ?options, "parsing document");
    match parser::parse_document(input, options) {
        Ok(value) => {
            debug!(root = value.kind(), "parsed document");
            Ok(value)
        }
        Err(err) => {
            debug!(error = %err, "rejected document");
            Err(err)
        }
    }
}
