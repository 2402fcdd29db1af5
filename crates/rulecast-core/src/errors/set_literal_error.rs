//! Errors from the set-literal grammar.

use super::error_code::{self, RulecastErrorCode};

/// A textual set encoding that does not match the accepted grammar.
/// Offsets are byte positions into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetLiteralError {
    #[error("unexpected end of input at offset {offset}, expected {expected}")]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },

    #[error("unexpected {found:?} at offset {offset}, expected {expected}")]
    UnexpectedChar {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid escape \\{found} at offset {offset}")]
    InvalidEscape { offset: usize, found: char },

    #[error("`{{}}` at offset {offset} is a dict literal, not a set")]
    DictLiteral { offset: usize },

    #[error("blank item at offset {offset}")]
    BlankItem { offset: usize },

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}

impl RulecastErrorCode for SetLiteralError {
    fn error_code(&self) -> &'static str {
        error_code::SET_LITERAL_ERROR
    }
}
