use proto_outline_schema::IndentStyle;
use crate::{error::OutlineError, utils::quote};

/// What to do with a `}` when no block is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePolicy {
    /// Stop with `OutlineError::UnbalancedClose`.
    #[default]
    Fatal,
    /// Log a warning and drop the line.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranscodeOptions {
    pub indent:              IndentStyle,
    pub on_unbalanced_close: ClosePolicy,
    /// Treat blocks still open at end of input as an error instead of a warning.
    pub strict:              bool,
}

impl TranscodeOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.indent.separator = separator;
        self
    }

    pub fn with_nesting(mut self, nesting: char) -> Self {
        self.indent.nesting = nesting;
        self
    }

    pub fn with_close_policy(mut self, policy: ClosePolicy) -> Self {
        self.on_unbalanced_close = policy;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Take the indent character from a flag value. Only the first character is used.
pub fn parse_indent_char(value: &str) -> Result<char, OutlineError> {
    value
        .chars()
        .next()
        .ok_or_else(|| OutlineError::InvalidIndent(quote(value)))
}
