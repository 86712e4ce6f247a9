// SPDX-License-Identifier: Unlicense
use crate::ast::{self, NodeKind, Tree};
use crate::value::Value;

enum Step {
    Visit(ast::Id),
    Apply(ast::Id),
}

struct Evaluator<'t> {
    tree: &'t Tree,
    values: Vec<Value>,
}

impl<'t> Evaluator<'t> {
    fn new(tree: &'t Tree) -> Self {
        Self {
            tree,
            values: Vec::new(),
        }
    }

    fn pop(&mut self) -> Value {
        self.values
            .pop()
            .unwrap_or_else(|| Value::Error("operand stack underflow".into()))
    }

    // Post-order with an explicit stack: both operands first, then the operator.
    fn eval_impl(mut self, root: ast::Id) -> Value {
        let mut work = vec![Step::Visit(root)];
        while let Some(step) = work.pop() {
            match step {
                Step::Visit(id) => match &self.tree[id].kind {
                    NodeKind::Lit(lit) => self.values.push(Value::from_literal(lit)),
                    NodeKind::BiOp(_, lhs, rhs) => {
                        work.push(Step::Apply(id));
                        work.push(Step::Visit(*rhs));
                        work.push(Step::Visit(*lhs));
                    }
                },
                Step::Apply(id) => {
                    let NodeKind::BiOp(kind, _, _) = self.tree[id].kind else {
                        continue;
                    };
                    let rhs = self.pop();
                    let lhs = self.pop();
                    let value = Value::binary_op(kind, lhs, rhs);
                    log::trace!("n{} => {}", id.index(), value);
                    self.values.push(value);
                }
            }
        }
        self.pop()
    }
}

impl Tree {
    /// Evaluates the whole tree. Failures come back as `Value::Error`.
    pub fn eval(&self) -> Value {
        Evaluator::new(self).eval_impl(self.root())
    }
}
