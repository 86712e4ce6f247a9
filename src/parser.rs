// SPDX-License-Identifier: Unlicense
//! Recursive-descent parser.
//!
//! ```text
//! expr    := term   { ADD_OP  term  }
//! term    := power  { MULT_OP power }
//! power   := factor { EXP_OP  factor }
//! factor  := ADD_OP factor | CONSTANT | '(' expr ')'
//! ```
//!
//! Every repetition folds to the left, `^` included.
use crate::ast::{self, BiOpKind, NodeKind, Tree};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, Tokenizer, UnknownChars};

/// Limit on nested `factor`s (parentheses and unary signs). Each level costs
/// a full `expr -> term -> power -> factor` descent, so this keeps parsing
/// within a 2 MiB thread stack. Flat operator chains are not limited.
pub const MAX_NESTING: usize = 128;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unknown_chars: UnknownChars,
}

type Result<T> = std::result::Result<T, ParseError>;

struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    arena: ast::Arena,
    nesting: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, options: &ParseOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(source, options.unknown_chars),
            arena: ast::Arena::new(),
            nesting: 0,
        }
    }

    fn new_node(&mut self, kind: NodeKind) -> ast::Id {
        self.arena.alloc(ast::Node { kind })
    }

    fn peek(&self) -> Result<Token<'src>> {
        let token = *self.tokenizer.peek();
        if token.kind == TokenKind::Unknown {
            let ch = token.lexeme.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ParseError::UnknownCharacter {
                ch,
                offset: token.offset,
            });
        }
        Ok(token)
    }

    fn operator(&self, token: &Token<'_>) -> Result<BiOpKind> {
        BiOpKind::from_lexeme(token.lexeme).ok_or_else(|| ParseError::UnexpectedToken {
            found: token.describe(),
            offset: token.offset,
        })
    }

    fn binary(&mut self, op: &Token<'_>, lhs: ast::Id, rhs: ast::Id) -> Result<ast::Id> {
        let kind = self.operator(op)?;
        Ok(self.new_node(NodeKind::BiOp(kind, lhs, rhs)))
    }

    /// `operand { level operand }`, folded left.
    fn fold(
        &mut self,
        level: TokenKind,
        operand: fn(&mut Self) -> Result<ast::Id>,
    ) -> Result<ast::Id> {
        let mut node = operand(self)?;
        loop {
            let op = self.peek()?;
            if op.kind != level {
                return Ok(node);
            }
            self.tokenizer.advance();
            let rhs = operand(self)?;
            node = self.binary(&op, node, rhs)?;
        }
    }

    fn expr(&mut self) -> Result<ast::Id> {
        self.fold(TokenKind::AddOp, Self::term)
    }

    fn term(&mut self) -> Result<ast::Id> {
        self.fold(TokenKind::MultOp, Self::power)
    }

    fn power(&mut self) -> Result<ast::Id> {
        self.fold(TokenKind::ExpOp, Self::factor)
    }

    fn factor(&mut self) -> Result<ast::Id> {
        let token = self.peek()?;
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::TooDeep {
                offset: token.offset,
            });
        }
        self.nesting += 1;
        let node = self.factor_impl(token);
        self.nesting -= 1;
        node
    }

    fn factor_impl(&mut self, token: Token<'src>) -> Result<ast::Id> {
        match token.kind {
            TokenKind::AddOp => {
                self.tokenizer.advance();
                let inner = self.factor()?;
                match self.operator(&token)? {
                    BiOpKind::Sub => {
                        let zero = self.new_node(NodeKind::Lit("0".into()));
                        self.binary(&token, zero, inner)
                    }
                    _ => Ok(inner),
                }
            }
            TokenKind::Number => {
                self.tokenizer.advance();
                Ok(self.new_node(NodeKind::Lit(token.lexeme.to_string())))
            }
            TokenKind::LParen => {
                self.tokenizer.advance();
                let inner = self.expr()?;
                let close = self.peek()?;
                if close.kind != TokenKind::RParen {
                    return Err(ParseError::UnclosedParen {
                        open: token.offset,
                        found: close.describe(),
                        offset: close.offset,
                    });
                }
                self.tokenizer.advance();
                Ok(inner)
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEnd {
                offset: token.offset,
            }),
            _ => Err(ParseError::UnexpectedToken {
                found: token.describe(),
                offset: token.offset,
            }),
        }
    }

    fn parse(mut self) -> Result<Tree> {
        let root = self.expr()?;
        if self.peek()?.kind == TokenKind::Eol {
            self.tokenizer.advance();
        }
        let rest = self.peek()?;
        match rest.kind {
            TokenKind::Eof => Ok(Tree::new(self.arena, root)),
            TokenKind::RParen => Err(ParseError::UnmatchedParen {
                offset: rest.offset,
            }),
            _ => Err(ParseError::TrailingInput {
                found: rest.describe(),
                offset: rest.offset,
            }),
        }
    }
}

pub fn parse(source: &str) -> Result<Tree> {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Tree> {
    log::debug!("parsing {source:?}");
    let tree = Parser::new(source, options).parse();
    match &tree {
        Ok(tree) => log::debug!("parsed {} nodes", tree.len()),
        Err(e) => log::debug!("parse failed: {e}"),
    }
    tree
}
