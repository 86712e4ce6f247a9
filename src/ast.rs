// SPDX-License-Identifier: Unlicense
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BiOpKind {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }
}

/// A literal keeps its digit run verbatim; conversion happens at evaluation.
/// Unary sign never appears here, it is desugared into `BiOp` by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Lit(String),
    BiOp(BiOpKind, Id, Id),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
}

pub type Id = id_arena::Id<Node>;
pub type Arena = id_arena::Arena<Node>;

/// A parsed expression. Immutable once built; every node lives in `arena`.
#[derive(Debug)]
pub struct Tree {
    arena: Arena,
    root: Id,
}

impl Tree {
    pub(crate) fn new(arena: Arena, root: Id) -> Self {
        Self { arena, root }
    }

    pub fn root(&self) -> Id {
        self.root
    }

    pub fn node(&self, id: Id) -> &Node {
        &self.arena[id]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn is_lit(&self, id: Id) -> bool {
        matches!(self.node(id).kind, NodeKind::Lit(_))
    }
}

impl Index<Id> for Tree {
    type Output = Node;

    fn index(&self, id: Id) -> &Node {
        self.node(id)
    }
}
