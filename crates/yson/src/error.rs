//! Error type for strict-mode formatting.

use thiserror::Error;

/// Structural defects detected while scanning a YSON document.
///
/// The lenient entry points never report these; they surface only from
/// [`YsonFormatter::format_strict`](crate::format::YsonFormatter::format_strict).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum YsonFormatError {
    /// Input ended with open `{`, `[` or `(` delimiters.
    #[error("input ended with {open} unclosed delimiter(s)")]
    UnclosedDelimiters { open: usize },

    /// A closing delimiter appeared with no matching opener.
    #[error("unexpected {delimiter:?} at byte {offset}")]
    UnexpectedClose { delimiter: char, offset: usize },

    /// A string literal was still open at end of input.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString { offset: usize },
}
