//! Literal tokens `true`, `false`, and `null`.

use crate::cursor::Source;
use crate::error::{ParseError, Result};
use crate::value::Value;

/// A literal token and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    /// Keywords in the order the dispatcher tries them.
    pub const ALL: [Keyword; 3] = [Keyword::True, Keyword::False, Keyword::Null];

    /// Source text of the keyword.
    pub fn literal(self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
        }
    }

    fn value(self) -> Value {
        match self {
            Keyword::True => Value::Bool(true),
            Keyword::False => Value::Bool(false),
            Keyword::Null => Value::Null,
        }
    }
}

/// Match `keyword` at the read position.
///
/// A mismatch is `Ok(None)` for `true` and `false`. `null` is tried last by
/// the dispatcher, so a mismatch there means no production matched at all and
/// fails with [`ParseError::MissingValue`].
pub fn parse_keyword<S: Source + ?Sized>(src: &mut S, keyword: Keyword) -> Result<Option<Value>> {
    let literal = keyword.literal();
    let start = src.index();
    let window = src.slice(start, start + literal.len());
    if window.iter().copied().eq(literal.chars()) {
        src.advance(literal.len());
        return Ok(Some(keyword.value()));
    }
    if keyword == Keyword::Null {
        return Err(ParseError::MissingValue);
    }
    Ok(None)
}
