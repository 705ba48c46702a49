//! Insignificant whitespace and structural separators.

use crate::cursor::Source;
use crate::error::{ParseError, Result};

/// Whitespace allowed between tokens.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Advance past any run of whitespace. Never fails.
pub fn skip_whitespace<S: Source + ?Sized>(src: &mut S) {
    while let Some(c) = src.peek() {
        if !is_whitespace(c) {
            break;
        }
        src.advance(1);
    }
}

/// Consume a required `,`.
pub fn expect_comma<S: Source + ?Sized>(src: &mut S) -> Result<()> {
    expect_separator(src, ',', ParseError::ExpectedComma)
}

/// Consume a required `:`.
pub fn expect_colon<S: Source + ?Sized>(src: &mut S) -> Result<()> {
    expect_separator(src, ':', ParseError::ExpectedColon)
}

fn expect_separator<S: Source + ?Sized>(src: &mut S, sep: char, err: ParseError) -> Result<()> {
    if src.current_char()? != sep {
        return Err(err);
    }
    src.advance(1);
    Ok(())
}
