//! Character cursor shared by all sub-parsers.
//!
//! Sub-parsers only see the [`Source`] capability, never the concrete cursor,
//! so each production can be driven and tested in isolation.

use crate::error::{ParseError, Result};

/// Read access to the input plus a forward-only position.
pub trait Source {
    /// Character at the read position.
    fn current_char(&self) -> Result<char>;

    /// Character one past the read position.
    fn next_char(&self) -> Result<char>;

    /// Move the read position forward by `n` characters.
    ///
    /// Not bounds checked: the position may transiently pass the end, and the
    /// next read reports [`ParseError::UnexpectedEnd`].
    fn advance(&mut self, n: usize);

    /// Characters in `start..end`, clamped to the input.
    fn slice(&self, start: usize, end: usize) -> &[char];

    /// Character at an absolute offset, if any.
    fn peek_at(&self, index: usize) -> Option<char>;

    /// Current read position.
    fn index(&self) -> usize;

    /// Input length in characters.
    fn len(&self) -> usize;

    /// Returns `true` once every character has been consumed.
    fn is_at_end(&self) -> bool {
        self.index() >= self.len()
    }

    /// Character at the read position, if any.
    fn peek(&self) -> Option<char> {
        self.peek_at(self.index())
    }
}

/// Owns the decoded input and the read position for one parse.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    index: usize,
}

impl Cursor {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            index: 0,
        }
    }
}

impl Source for Cursor {
    fn current_char(&self) -> Result<char> {
        self.chars
            .get(self.index)
            .copied()
            .ok_or(ParseError::UnexpectedEnd)
    }

    fn next_char(&self) -> Result<char> {
        self.chars
            .get(self.index + 1)
            .copied()
            .ok_or(ParseError::UnexpectedEnd)
    }

    fn advance(&mut self, n: usize) {
        self.index += n;
    }

    fn slice(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        &self.chars[start..end]
    }

    fn peek_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn index(&self) -> usize {
        self.index
    }

    fn len(&self) -> usize {
        self.chars.len()
    }
}
