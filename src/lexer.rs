// SPDX-License-Identifier: Unlicense
use std::fmt;
use std::str::Chars;

/// Token categories. `AddOp`, `MultOp` and `ExpOp` are precedence levels;
/// the concrete operator is recovered from the lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    AddOp,
    MultOp,
    ExpOp,
    Number,
    LParen,
    RParen,
    Eol,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::AddOp => "ADD_OP",
            TokenKind::MultOp => "MULT_OP",
            TokenKind::ExpOp => "EXP_OP",
            TokenKind::Number => "CONSTANT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eol => "EOL",
            TokenKind::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// Byte offset of the lexeme in the input.
    pub offset: usize,
}

impl Token<'_> {
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".into(),
            TokenKind::Eol => "end of line".into(),
            kind => format!("{kind} '{}'", self.lexeme),
        }
    }
}

/// What the tokenizer does with characters outside the expression alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownChars {
    /// Emit an `Unknown` token; the parser turns it into an error.
    #[default]
    Reject,
    /// Drop the character without emitting anything.
    Skip,
}

const EOF_CHAR: char = '\0';

/// Pull-based tokenizer. `peek` is idempotent until `advance` is called;
/// once the input is exhausted every `peek` returns `Eof`.
pub struct Tokenizer<'src> {
    text: &'src str,
    chars: Chars<'src>,
    unknown_chars: UnknownChars,
    current: Token<'src>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(text: &'src str, unknown_chars: UnknownChars) -> Self {
        let mut tokenizer = Self {
            text,
            chars: text.chars(),
            unknown_chars,
            current: Token {
                kind: TokenKind::Eof,
                lexeme: "",
                offset: text.len(),
            },
        };
        tokenizer.current = tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token<'src> {
        &self.current
    }

    /// Commits to the current token and returns it.
    pub fn advance(&mut self) -> Token<'src> {
        let next = self.next_token();
        std::mem::replace(&mut self.current, next)
    }

    fn offset(&self) -> usize {
        self.text.len() - self.chars.as_str().len()
    }

    fn peek_char(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    fn next_token(&mut self) -> Token<'src> {
        loop {
            self.skip_whitespace();
            let start = self.offset();
            let Some(c) = self.chars.next() else {
                return Token {
                    kind: TokenKind::Eof,
                    lexeme: "",
                    offset: start,
                };
            };

            let kind = match c {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '+' | '-' => TokenKind::AddOp,
                '*' | '/' | '%' => TokenKind::MultOp,
                '^' => TokenKind::ExpOp,
                '\n' => TokenKind::Eol,
                '0'..='9' => {
                    while self.peek_char().is_ascii_digit() {
                        self.chars.next();
                    }
                    TokenKind::Number
                }
                other => match self.unknown_chars {
                    UnknownChars::Reject => TokenKind::Unknown,
                    UnknownChars::Skip => {
                        log::debug!("skipping unknown character {other:?} at {start}");
                        continue;
                    }
                },
            };

            let token = Token {
                kind,
                lexeme: &self.text[start..self.offset()],
                offset: start,
            };
            log::trace!("token {} {:?} at {}", token.kind, token.lexeme, token.offset);
            return token;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), ' ' | '\t' | '\r' | '"' | '\'') {
            self.chars.next();
        }
    }
}
