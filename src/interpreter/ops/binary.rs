use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{BinOp, SourceLocation};

impl Interpreter {
    /// Apply an arithmetic operator to two evaluated operands.
    ///
    /// Arithmetic wraps on overflow (64-bit two's complement) and division
    /// truncates toward zero; only a zero divisor is an error.
    #[inline]
    pub(crate) fn apply_binary_op(
        &self,
        op: BinOp,
        left: i64,
        right: i64,
        location: &SourceLocation,
    ) -> Result<i64, RuntimeError> {
        match op {
            BinOp::Add => Ok(left.wrapping_add(right)),
            BinOp::Sub => Ok(left.wrapping_sub(right)),
            BinOp::Mul => Ok(left.wrapping_mul(right)),
            BinOp::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero {
                        location: location.clone(),
                    });
                }
                Ok(left.wrapping_div(right))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn apply(op: BinOp, left: i64, right: i64) -> Result<i64, RuntimeError> {
        let location = SourceLocation::new(Arc::from("test"), 1, 1);
        Interpreter::new().apply_binary_op(op, left, right, &location)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply(BinOp::Add, 2, 3), Ok(5));
        assert_eq!(apply(BinOp::Sub, 2, 3), Ok(-1));
        assert_eq!(apply(BinOp::Mul, -4, 3), Ok(-12));
        assert_eq!(apply(BinOp::Div, 7, 2), Ok(3));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(apply(BinOp::Div, -7, 2), Ok(-3));
        assert_eq!(apply(BinOp::Div, 7, -2), Ok(-3));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(apply(BinOp::Add, i64::MAX, 1), Ok(i64::MIN));
        assert_eq!(apply(BinOp::Sub, i64::MIN, 1), Ok(i64::MAX));
        assert_eq!(apply(BinOp::Div, i64::MIN, -1), Ok(i64::MIN));
    }

    #[test]
    fn test_zero_divisor() {
        assert!(matches!(
            apply(BinOp::Div, 1, 0),
            Err(RuntimeError::DivisionByZero { .. })
        ));
        assert!(matches!(
            apply(BinOp::Div, 0, 0),
            Err(RuntimeError::DivisionByZero { .. })
        ));
    }
}
