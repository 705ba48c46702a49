//! Value dispatch, containers, and the document driver.
//!
//! Every value position runs the same ordered dispatch: string, number,
//! object, array, `true`, `false`, `null`. Scalars complete immediately.
//! Arrays and objects push a [`Frame`] onto an explicit stack instead of
//! recursing, so nesting depth is limited only by memory (or by
//! [`ParseOptions::max_depth`]).

use crate::cursor::{Cursor, Source};
use crate::error::{ParseError, Result};
use crate::keyword::{parse_keyword, Keyword};
use crate::lexical::{expect_colon, expect_comma, skip_whitespace};
use crate::number::parse_number;
use crate::options::{EscapeStyle, ParseOptions};
use crate::string::parse_string;
use crate::value::{Map, Value};
use tracing::trace;

/// Parse a complete document: an array or object root, optionally surrounded
/// by whitespace.
pub fn parse_document(input: &str, options: &ParseOptions) -> Result<Value> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut cursor = Cursor::new(input);
    skip_whitespace(&mut cursor);
    match cursor.peek() {
        None => return Err(ParseError::EmptyInput),
        Some('[' | '{') => {}
        Some(_) => return Err(ParseError::InvalidRoot),
    }

    let value = parse_value(&mut cursor, options)?;

    // Running out of input here is success, not an error.
    skip_whitespace(&mut cursor);
    if !cursor.is_at_end() {
        return Err(ParseError::TrailingContent);
    }
    Ok(value)
}

/// Parse one value at the read position, including everything nested in it.
///
/// Reading past the end while a container is open fails with that
/// container's `Unterminated*` error.
pub fn parse_value<S: Source + ?Sized>(src: &mut S, options: &ParseOptions) -> Result<Value> {
    let mut stack: Vec<Frame> = Vec::new();
    match drive(src, options, &mut stack) {
        Err(ParseError::UnexpectedEnd) => Err(stack
            .last()
            .map_or(ParseError::UnexpectedEnd, Frame::unterminated)),
        other => other,
    }
}

fn drive<S: Source + ?Sized>(
    src: &mut S,
    options: &ParseOptions,
    stack: &mut Vec<Frame>,
) -> Result<Value> {
    loop {
        let mut completed = match dispatch(src, options.escapes)? {
            Production::Value(value) => Some(value),
            Production::Open(frame) => {
                if let Some(limit) = options.max_depth {
                    if stack.len() >= limit {
                        return Err(ParseError::DepthLimitExceeded(limit));
                    }
                }
                trace!(depth = stack.len() + 1, kind = frame.kind(), "open container");
                stack.push(frame);
                None
            }
        };

        // Fold finished values into their parents until some container asks
        // for another value, or the root completes.
        loop {
            let Some(frame) = stack.last_mut() else {
                return completed.ok_or(ParseError::MissingValue);
            };
            if let Some(value) = completed.take() {
                frame.accept(value);
                skip_whitespace(src);
            }
            if frame.resume(src, options.escapes)? {
                break;
            }
            completed = stack.pop().map(Frame::into_value);
        }
    }
}

/// Outcome of dispatching at a value position.
enum Production {
    /// A complete scalar.
    Value(Value),
    /// An opened container; its contents follow.
    Open(Frame),
}

/// Try each production in order and return the first that matches.
fn dispatch<S: Source + ?Sized>(src: &mut S, escapes: EscapeStyle) -> Result<Production> {
    if let Some(s) = parse_string(src, escapes)? {
        return Ok(Production::Value(Value::String(s)));
    }
    if let Some(n) = parse_number(src)? {
        return Ok(Production::Value(n));
    }
    if let Some(frame) = open_object(src)? {
        return Ok(Production::Open(frame));
    }
    if let Some(frame) = open_array(src)? {
        return Ok(Production::Open(frame));
    }
    for keyword in Keyword::ALL {
        if let Some(value) = parse_keyword(src, keyword)? {
            return Ok(Production::Value(value));
        }
    }
    Err(ParseError::MissingValue)
}

fn open_array<S: Source + ?Sized>(src: &mut S) -> Result<Option<Frame>> {
    if src.current_char()? != '[' {
        return Ok(None);
    }
    src.advance(1);
    skip_whitespace(src);
    Ok(Some(Frame::Array {
        items: Vec::new(),
        first: true,
    }))
}

fn open_object<S: Source + ?Sized>(src: &mut S) -> Result<Option<Frame>> {
    if src.current_char()? != '{' {
        return Ok(None);
    }
    src.advance(1);
    skip_whitespace(src);
    Ok(Some(Frame::Object {
        members: Map::new(),
        key: String::new(),
        first: true,
    }))
}

/// An open container awaiting more content.
#[derive(Debug)]
enum Frame {
    Array {
        items: Vec<Value>,
        first: bool,
    },
    Object {
        members: Map,
        /// Key of the member whose value is being parsed.
        key: String,
        first: bool,
    },
}

impl Frame {
    fn kind(&self) -> &'static str {
        match self {
            Frame::Array { .. } => "array",
            Frame::Object { .. } => "object",
        }
    }

    fn unterminated(&self) -> ParseError {
        match self {
            Frame::Array { .. } => ParseError::UnterminatedArray,
            Frame::Object { .. } => ParseError::UnterminatedObject,
        }
    }

    /// Store a finished element or member value. Duplicate keys overwrite.
    fn accept(&mut self, value: Value) {
        match self {
            Frame::Array { items, .. } => items.push(value),
            Frame::Object { members, key, .. } => {
                members.insert(std::mem::take(key), value);
            }
        }
    }

    /// Continue after the opening delimiter or after a stored value.
    ///
    /// Consumes the closing delimiter and returns `false` when the container
    /// ends. Otherwise consumes the separator (and, for objects, the key and
    /// colon) and returns `true` with the read position at the next value.
    fn resume<S: Source + ?Sized>(&mut self, src: &mut S, escapes: EscapeStyle) -> Result<bool> {
        match self {
            Frame::Array { first, .. } => {
                if src.current_char()? == ']' {
                    src.advance(1);
                    return Ok(false);
                }
                if !*first {
                    expect_comma(src)?;
                    skip_whitespace(src);
                }
                *first = false;
                Ok(true)
            }
            Frame::Object { key, first, .. } => {
                if src.current_char()? == '}' {
                    src.advance(1);
                    return Ok(false);
                }
                if !*first {
                    skip_whitespace(src);
                    expect_comma(src)?;
                    skip_whitespace(src);
                }
                *first = false;
                *key = parse_string(src, escapes)?.ok_or(ParseError::ExpectedKey)?;
                skip_whitespace(src);
                expect_colon(src)?;
                skip_whitespace(src);
                Ok(true)
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Frame::Array { items, .. } => Value::Array(items),
            Frame::Object { members, .. } => Value::Object(members),
        }
    }
}
