//! Expression evaluation
//!
//! [`Interpreter::evaluate_expr`] is the single dispatch point over the four
//! AST node kinds. Operator chains fold into left-deep trees as tall as the
//! chain is long, so the walk keeps its own work stack instead of using the
//! call stack. Operands are always evaluated left before right, so an
//! assignment on the right-hand side never takes effect before the left
//! operand has been read.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{AstNode, BinOp, SourceLocation};

/// Pending work for the evaluation loop
enum Step<'a> {
    /// Evaluate a node and push its value
    Eval(&'a AstNode),
    /// Pop two operands (right on top) and push the result
    Apply {
        op: BinOp,
        location: &'a SourceLocation,
    },
    /// Bind the top value to a name, leaving it on the stack
    Store(&'a str),
}

impl Interpreter {
    /// Evaluate a single expression against the current environment
    pub fn evaluate_expr(&mut self, expr: &AstNode) -> Result<i64, RuntimeError> {
        let mut steps = vec![Step::Eval(expr)];
        let mut values: Vec<i64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Eval(AstNode::IntLiteral { value, .. }) => values.push(*value),

                Step::Eval(AstNode::VarRef { name, location }) => {
                    values.push(self.lookup_variable(name, location)?);
                }

                Step::Eval(AstNode::BinaryOp {
                    op,
                    left,
                    right,
                    location,
                }) => {
                    steps.push(Step::Apply { op: *op, location });
                    steps.push(Step::Eval(right));
                    steps.push(Step::Eval(left));
                }

                Step::Eval(AstNode::Assign { target, value, .. }) => {
                    steps.push(Step::Store(target));
                    steps.push(Step::Eval(value));
                }

                Step::Apply { op, location } => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("binary operator without two operands");
                    };
                    values.push(self.apply_binary_op(op, left, right, location)?);
                }

                Step::Store(target) => {
                    let Some(value) = values.pop() else {
                        unreachable!("assignment without a value");
                    };
                    values.push(self.assign_variable(target, value));
                }
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("expression produced no value"),
        }
    }
}
