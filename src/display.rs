// SPDX-License-Identifier: Unlicense
//! Canonical reconstruction: every non-literal operand is parenthesized,
//! operators are printed infix with single spaces.
use std::fmt;

use crate::ast::{self, NodeKind, Tree};

enum Piece {
    Node(ast::Id),
    Operand(ast::Id),
    Text(&'static str),
    Op(char),
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut work = vec![Piece::Node(self.root())];
        while let Some(piece) = work.pop() {
            match piece {
                Piece::Node(id) => match &self[id].kind {
                    NodeKind::Lit(lit) => f.write_str(lit)?,
                    NodeKind::BiOp(kind, lhs, rhs) => {
                        work.push(Piece::Operand(*rhs));
                        work.push(Piece::Op(kind.symbol()));
                        work.push(Piece::Operand(*lhs));
                    }
                },
                Piece::Operand(id) if self.is_lit(id) => work.push(Piece::Node(id)),
                Piece::Operand(id) => {
                    work.push(Piece::Text(")"));
                    work.push(Piece::Node(id));
                    work.push(Piece::Text("("));
                }
                Piece::Text(text) => f.write_str(text)?,
                Piece::Op(symbol) => write!(f, " {symbol} ")?,
            }
        }
        Ok(())
    }
}
