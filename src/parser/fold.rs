//! Left-associative tree construction
//!
//! The `E -> T (('+' | '-') T)*` and `T -> F (('*' | '/') F)*` rules read as
//! a first operand followed by a continuation of `(operator, operand)` pairs.
//! Nesting each pair inside the previous one would make `a - b - c` mean
//! `a - (b - c)`; [`fold_left`] instead accumulates from the left so the
//! result is `(a - b) - c`.

use crate::parser::ast::{AstNode, BinOp, SourceLocation};

/// One `(operator, operand)` step of an `E'` or `T'` continuation
#[derive(Debug, Clone, PartialEq)]
pub struct Continuation {
    pub op: BinOp,
    /// Location of the operator token
    pub location: SourceLocation,
    pub operand: AstNode,
}

/// Fold `first op1 x1 op2 x2 ...` into `((first op1 x1) op2 x2) ...`.
pub fn fold_left<C>(first: AstNode, continuation: C) -> AstNode
where
    C: IntoIterator<Item = Continuation>,
{
    continuation
        .into_iter()
        .fold(first, |accumulated, step| AstNode::BinaryOp {
            op: step.op,
            left: Box::new(accumulated),
            right: Box::new(step.operand),
            location: step.location,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn loc(column: usize) -> SourceLocation {
        SourceLocation::new(Arc::from("test"), 1, column)
    }

    fn var(name: &str, column: usize) -> AstNode {
        AstNode::VarRef {
            name: name.to_string(),
            location: loc(column),
        }
    }

    fn step(op: BinOp, column: usize, operand: AstNode) -> Continuation {
        Continuation {
            op,
            location: loc(column),
            operand,
        }
    }

    #[test]
    fn test_empty_continuation_is_identity() {
        assert_eq!(fold_left(var("a", 1), Vec::<Continuation>::new()), var("a", 1));
    }

    #[test]
    fn test_fold_is_left_associative() {
        // a - b - c
        let tree = fold_left(
            var("a", 1),
            vec![
                step(BinOp::Sub, 3, var("b", 5)),
                step(BinOp::Sub, 7, var("c", 9)),
            ],
        );

        let expected = AstNode::BinaryOp {
            op: BinOp::Sub,
            left: Box::new(AstNode::BinaryOp {
                op: BinOp::Sub,
                left: Box::new(var("a", 1)),
                right: Box::new(var("b", 5)),
                location: loc(3),
            }),
            right: Box::new(var("c", 9)),
            location: loc(7),
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_fold_keeps_operator_order() {
        // a + b - c: the later operator ends up at the root
        let tree = fold_left(
            var("a", 1),
            vec![
                step(BinOp::Add, 3, var("b", 5)),
                step(BinOp::Sub, 7, var("c", 9)),
            ],
        );

        match &tree {
            AstNode::BinaryOp {
                op: BinOp::Sub,
                left,
                right,
                location,
            } => {
                assert_eq!(location.column, 7);
                assert_eq!(**right, var("c", 9));
                assert!(matches!(**left, AstNode::BinaryOp { op: BinOp::Add, .. }));
            }
            other => panic!("Expected subtraction at the root, got {:?}", other),
        }
    }
}
