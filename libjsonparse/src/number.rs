//! Numeric literals.
//!
//! The literal is scanned per the JSON number grammar and converted through
//! `f64`. Any result with no fractional part collapses to [`Value::Integer`],
//! whether or not the literal was written with a decimal point or exponent.

use crate::cursor::Source;
use crate::error::{ParseError, Result};
use crate::value::Value;
use num_bigint::BigInt;
use num_traits::FromPrimitive;

/// Parse a number at the read position.
///
/// Returns `Ok(None)` without consuming anything when the read position does
/// not start a number.
pub fn parse_number<S: Source + ?Sized>(src: &mut S) -> Result<Option<Value>> {
    let start = src.index();

    // Optional minus
    let negative = src.peek() == Some('-');
    if negative {
        src.advance(1);
    }

    // Integer part: a lone zero, or a run of digits
    let int_digits = match src.peek() {
        Some('0') => {
            src.advance(1);
            1
        }
        _ => skip_digits(src),
    };
    if int_digits == 0 {
        if negative {
            return Err(missing_digits(src));
        }
        return Ok(None);
    }

    // Fractional part
    if src.peek() == Some('.') {
        src.advance(1);
        if skip_digits(src) == 0 {
            return Err(missing_digits(src));
        }
    }

    // Exponent
    if matches!(src.peek(), Some('e' | 'E')) {
        src.advance(1);
        if matches!(src.peek(), Some('+' | '-')) {
            src.advance(1);
        }
        if skip_digits(src) == 0 {
            return Err(missing_digits(src));
        }
    }

    let literal: String = src.slice(start, src.index()).iter().collect();
    let number: f64 = literal.parse().map_err(|_| ParseError::InvalidNumber)?;
    Ok(Some(collapse(number)))
}

/// Advance past ASCII digits, returning how many were consumed.
fn skip_digits<S: Source + ?Sized>(src: &mut S) -> usize {
    let mut count = 0;
    while src.peek().is_some_and(|c| c.is_ascii_digit()) {
        src.advance(1);
        count += 1;
    }
    count
}

/// Error for a sign, point, or exponent marker with no digits after it.
/// Input that simply ran out is left for the enclosing container to report.
fn missing_digits<S: Source + ?Sized>(src: &S) -> ParseError {
    if src.is_at_end() {
        ParseError::UnexpectedEnd
    } else {
        ParseError::InvalidNumber
    }
}

/// Represent a whole-valued float as an exact integer.
fn collapse(number: f64) -> Value {
    if number.fract() == 0.0 {
        if let Some(n) = BigInt::from_f64(number) {
            return Value::Integer(n);
        }
    }
    Value::Float(number)
}
