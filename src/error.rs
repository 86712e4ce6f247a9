// SPDX-License-Identifier: Unlicense
use thiserror::Error;

/// Lexical and syntactic failures. Offsets are byte positions in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown character {ch:?} at offset {offset}")]
    UnknownCharacter { ch: char, offset: usize },

    #[error("wanted a CONSTANT, LPAREN or ADD_OP, got {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unclosed '(' at offset {open}: wanted an RPAREN, got {found} at offset {offset}")]
    UnclosedParen {
        open: usize,
        found: String,
        offset: usize,
    },

    #[error("unmatched ')' at offset {offset}")]
    UnmatchedParen { offset: usize },

    #[error("trailing input: {found} at offset {offset}")]
    TrailingInput { found: String, offset: usize },

    #[error("expression nested too deeply at offset {offset}")]
    TooDeep { offset: usize },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            Self::UnknownCharacter { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEnd { offset }
            | Self::UnclosedParen { offset, .. }
            | Self::UnmatchedParen { offset }
            | Self::TrailingInput { offset, .. }
            | Self::TooDeep { offset } => *offset,
        }
    }
}
