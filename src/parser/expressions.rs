//! Expression parsing implementation
//!
//! One method per grammar rule:
//!
//! ```text
//! E -> T (('+' | '-') T)*
//! T -> F (('*' | '/') F)*
//! F -> INTEGER | IDENTIFIER | '(' E ')' | IDENTIFIER '=' E
//! ```
//!
//! `E` and `T` collect their operator continuations and hand them to
//! [`fold_left`], so both levels come out left-associative. Assignment is
//! recognised in `F` with two tokens of lookahead and recurses into `E`,
//! which makes it right-associative.

use crate::parser::ast::*;
use crate::parser::fold::{fold_left, Continuation};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse expression (`E`, the top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, SyntaxError> {
        let first = self.parse_term()?;
        let continuation = self.parse_continuation(additive_op, Self::parse_term)?;
        Ok(fold_left(first, continuation))
    }

    /// Parse term (`T`)
    fn parse_term(&mut self) -> Result<AstNode, SyntaxError> {
        let first = self.parse_primary()?;
        let continuation = self.parse_continuation(multiplicative_op, Self::parse_primary)?;
        Ok(fold_left(first, continuation))
    }

    /// Collect `(op operand)*` for as long as the next token is an operator
    /// accepted by `op_for`.
    fn parse_continuation(
        &mut self,
        op_for: fn(TokenKind) -> Option<BinOp>,
        parse_operand: fn(&mut Self) -> Result<AstNode, SyntaxError>,
    ) -> Result<Vec<Continuation>, SyntaxError> {
        let mut continuation = Vec::new();

        while let Some(op) = self.lexer.peek_kind(1)?.and_then(op_for) {
            let location = self.lexer.next()?.location;
            let operand = parse_operand(self)?;
            continuation.push(Continuation {
                op,
                location,
                operand,
            });
        }

        Ok(continuation)
    }

    /// Parse primary expression (`F`)
    fn parse_primary(&mut self) -> Result<AstNode, SyntaxError> {
        let kind = match self.lexer.peek_kind(1)? {
            Some(kind) => kind,
            None => {
                return Err(SyntaxError::new(
                    "Unexpected end of input looking for primary expression",
                    self.lexer.current_location(),
                ))
            }
        };

        match kind {
            TokenKind::IntegerLiteral => {
                let token = self.expect(TokenKind::IntegerLiteral)?;
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    SyntaxError::new(
                        format!("Integer literal out of range: {}", token.lexeme),
                        token.location.clone(),
                    )
                })?;
                Ok(AstNode::IntLiteral {
                    value,
                    location: token.location,
                })
            }
            TokenKind::Identifier => {
                if self.lexer.peek_kind(2)? == Some(TokenKind::Assign) {
                    return self.parse_assignment();
                }
                let token = self.expect(TokenKind::Identifier)?;
                Ok(AstNode::VarRef {
                    name: token.lexeme,
                    location: token.location,
                })
            }
            TokenKind::LParen => {
                let open = self.expect(TokenKind::LParen)?;
                let inner = self.nested(&open.location, Self::parse_expression)?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => {
                let token = self.lexer.next()?;
                Err(SyntaxError::new(
                    format!("Invalid primary expression, found {}", token),
                    token.location,
                ))
            }
        }
    }

    /// Parse `IDENTIFIER '=' E`
    fn parse_assignment(&mut self) -> Result<AstNode, SyntaxError> {
        let target = self.expect(TokenKind::Identifier)?.lexeme;
        let location = self.expect(TokenKind::Assign)?.location;
        let value = Box::new(self.nested(&location, Self::parse_expression)?);

        Ok(AstNode::Assign {
            target,
            value,
            location,
        })
    }
}

fn additive_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Times => Some(BinOp::Mul),
        TokenKind::Divide => Some(BinOp::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{Parser, SyntaxError};

    fn parse_expr(source: &str) -> Result<AstNode, SyntaxError> {
        Parser::from_source(source, "test").parse_expression()
    }

    /// Render a tree fully parenthesised, to compare shapes.
    fn shape(node: &AstNode) -> String {
        match node {
            AstNode::BinaryOp {
                op, left, right, ..
            } => format!("({} {} {})", shape(left), op, shape(right)),
            AstNode::Assign { target, value, .. } => format!("({} = {})", target, shape(value)),
            AstNode::VarRef { name, .. } => name.clone(),
            AstNode::IntLiteral { value, .. } => value.to_string(),
        }
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let tree = parse_expr("8 - 4 - 2").unwrap();
        assert_eq!(shape(&tree), "((8 - 4) - 2)");
    }

    #[test]
    fn test_division_is_left_associative() {
        let tree = parse_expr("a / b / c * d").unwrap();
        assert_eq!(shape(&tree), "(((a / b) / c) * d)");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(shape(&parse_expr("2 + 3 * 4").unwrap()), "(2 + (3 * 4))");
        assert_eq!(shape(&parse_expr("(2 + 3) * 4").unwrap()), "((2 + 3) * 4)");
        assert_eq!(
            shape(&parse_expr("1 - 2 * 3 + 4 / 5").unwrap()),
            "((1 - (2 * 3)) + (4 / 5))"
        );
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let tree = parse_expr("x = y = 3").unwrap();
        assert_eq!(shape(&tree), "(x = (y = 3))");
    }

    #[test]
    fn test_assignment_value_extends_over_whole_expression() {
        let tree = parse_expr("x = 1 + 2 * y").unwrap();
        assert_eq!(shape(&tree), "(x = (1 + (2 * y)))");

        let tree = parse_expr("2 * x = 3 + 1").unwrap();
        assert_eq!(shape(&tree), "(2 * (x = (3 + 1)))");
    }

    #[test]
    fn test_operator_locations() {
        let tree = parse_expr("1 +\n 2 * 3").unwrap();

        match &tree {
            AstNode::BinaryOp {
                op: BinOp::Add,
                location,
                right,
                ..
            } => {
                assert_eq!((location.line, location.column), (1, 3));
                assert_eq!(right.location().line, 2);
                assert_eq!(right.location().column, 4);
            }
            other => panic!("Expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_location_is_equals_sign() {
        let tree = parse_expr("total = 4").unwrap();
        assert_eq!(tree.location().column, 7);
    }

    #[test]
    fn test_invalid_primary() {
        let err = parse_expr("1 + * 2").unwrap_err();
        assert_eq!(err.message, "Invalid primary expression, found '*'");
        assert_eq!(err.location.column, 5);

        let err = parse_expr("= 2").unwrap_err();
        assert_eq!(err.message, "Invalid primary expression, found '='");
    }

    #[test]
    fn test_literal_out_of_range() {
        let err = parse_expr("99999999999999999999").unwrap_err();
        assert_eq!(
            err.message,
            "Integer literal out of range: 99999999999999999999"
        );
        assert_eq!(err.location.column, 1);

        let tree = parse_expr("9223372036854775807").unwrap();
        assert!(matches!(tree, AstNode::IntLiteral { value: i64::MAX, .. }));
    }
}
