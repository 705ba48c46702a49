//! Parser configuration.

/// How the single-letter escapes `\b \f \n \r \t` decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeStyle {
    /// Decode to the control character the escape names (`\n` is U+000A).
    #[default]
    Standard,
    /// Keep the escape letter itself (`\n` is `n`).
    ///
    /// Matches output produced by older builds of this parser.
    Letter,
}

/// Options accepted by [`crate::parse_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Escape decoding rule.
    pub escapes: EscapeStyle,
    /// Maximum array/object nesting. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    /// Default options: standard escapes, no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escape decoding rule.
    pub fn with_escapes(mut self, escapes: EscapeStyle) -> Self {
        self.escapes = escapes;
        self
    }

    /// Cap the nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
