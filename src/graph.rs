// SPDX-License-Identifier: Unlicense
use std::fmt;
use std::io::{self, Write};

use crate::ast::{self, NodeKind, Tree};

enum Step {
    Node(ast::Id),
    Edge(ast::Id, ast::Id),
}

/// A Graphviz `digraph` view of a tree. Nodes are named `n<arena index>`.
pub struct Dot<'t> {
    tree: &'t Tree,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph g {{")?;
        // Declaration first, then each subtree followed by the edge into it.
        let mut work = vec![Step::Node(self.tree.root())];
        while let Some(step) = work.pop() {
            match step {
                Step::Node(id) => match &self.tree[id].kind {
                    NodeKind::Lit(lit) => writeln!(f, "    n{} [label=\"{lit}\"];", id.index())?,
                    NodeKind::BiOp(kind, lhs, rhs) => {
                        writeln!(f, "    n{} [label=\"{}\"];", id.index(), kind.symbol())?;
                        work.push(Step::Edge(id, *rhs));
                        work.push(Step::Node(*rhs));
                        work.push(Step::Edge(id, *lhs));
                        work.push(Step::Node(*lhs));
                    }
                },
                Step::Edge(from, to) => writeln!(f, "    n{} -> n{};", from.index(), to.index())?,
            }
        }
        writeln!(f, "}}")
    }
}

impl Tree {
    pub fn dot(&self) -> Dot<'_> {
        Dot { tree: self }
    }

    pub fn write_dot<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.dot())?;
        out.flush()
    }

    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }
}
