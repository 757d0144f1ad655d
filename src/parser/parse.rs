//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the token helpers shared by
//! the grammar rules, and the program-level entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, `expect`, and `Program -> Unit (';' Unit)*`
//! - `expressions`: the `E`, `T` and `F` rules
//! - `fold`: turning operator continuations into left-associative trees
//!
//! Parser methods are split across files using `impl Parser` blocks, the same
//! way each rule extends the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use tracing::debug;

pub use crate::parser::lexer::SyntaxError;

/// Deepest allowed nesting of parentheses and assignments
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive descent parser; owns the lexer it reads from
pub struct Parser<I: Iterator<Item = char>> {
    pub(crate) lexer: Lexer<I>,
    /// Open `(` and `=` levels around the current position
    depth: usize,
}

impl<'a> Parser<std::str::Chars<'a>> {
    /// Create a parser over an in-memory source string.
    pub fn from_source(source: &'a str, filename: &str) -> Self {
        Parser::new(Lexer::from_source(source, filename))
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(lexer: Lexer<I>) -> Self {
        Self { lexer, depth: 0 }
    }

    /// Parse the entire program: one or more `;`-separated units.
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut program = Program::new(self.parse_unit()?);

        while self.match_token(TokenKind::Semicolon)? {
            program.push(self.parse_unit()?);
        }

        if let Some(token) = self.lexer.peek(1)? {
            return Err(SyntaxError::new(
                format!("Unexpected token {}", token),
                token.location.clone(),
            ));
        }

        debug!(units = program.units().len(), "parsed program");
        Ok(program)
    }

    /// Parse a single expression, the body of one unit.
    pub fn parse_unit(&mut self) -> Result<AstNode, SyntaxError> {
        let unit = self.parse_expression()?;
        debug!(line = unit.location().line, "parsed unit");
        Ok(unit)
    }

    // ===== Helper methods =====

    pub(crate) fn check(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        Ok(self.lexer.peek_kind(1)? == Some(kind))
    }

    /// Consume the next token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        if self.check(kind)? {
            self.lexer.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Run `rule` one nesting level deeper, failing at `location` once
    /// [`MAX_NESTING_DEPTH`] is reached.
    pub(crate) fn nested<T>(
        &mut self,
        location: &SourceLocation,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::new(
                "Expression nested too deeply",
                location.clone(),
            ));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Consume a token of the given kind or fail.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        match self.lexer.peek(1)? {
            None => Err(SyntaxError::new(
                format!("Unexpected end of input, expected {}", kind),
                self.lexer.current_location(),
            )),
            Some(token) if token.kind != kind => Err(SyntaxError::new(
                format!("Expected {}, found {}", kind, token),
                token.location.clone(),
            )),
            Some(_) => self.lexer.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Program, SyntaxError> {
        Parser::from_source(source, "test").parse_program()
    }

    #[test]
    fn test_parse_single_unit() {
        let program = parse("1 + 2").unwrap();

        assert_eq!(program.units().len(), 1);
        assert!(matches!(
            program.units()[0],
            AstNode::BinaryOp { op: BinOp::Add, .. }
        ));
    }

    #[test]
    fn test_parse_multiple_units() {
        let program = parse("x = 5; y = x * 2;\n x + y").unwrap();

        assert_eq!(program.units().len(), 3);
        assert!(matches!(&program.units()[0], AstNode::Assign { target, .. } if target == "x"));
        assert!(matches!(&program.units()[1], AstNode::Assign { target, .. } if target == "y"));
        assert!(matches!(
            program.units()[2],
            AstNode::BinaryOp { op: BinOp::Add, .. }
        ));
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse("(1 + 2").unwrap_err();

        assert_eq!(err.message, "Unexpected end of input, expected ')'");
        assert_eq!((err.location.line, err.location.column), (1, 7));
    }

    #[test]
    fn test_wrong_token_in_expect() {
        let err = parse("(1 + 2 ;").unwrap_err();

        assert_eq!(err.message, "Expected ')', found ';'");
        assert_eq!(err.location.column, 8);
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse("1 2").unwrap_err();
        assert_eq!(err.message, "Unexpected token integer literal 2");
        assert_eq!(err.location.column, 3);

        let err = parse("(1))").unwrap_err();
        assert_eq!(err.message, "Unexpected token ')'");
    }

    #[test]
    fn test_trailing_semicolon() {
        let err = parse("x = 1;").unwrap_err();

        assert_eq!(
            err.message,
            "Unexpected end of input looking for primary expression"
        );
    }

    #[test]
    fn test_empty_program() {
        let err = parse("   \n").unwrap_err();

        assert_eq!(
            err.message,
            "Unexpected end of input looking for primary expression"
        );
        assert_eq!((err.location.line, err.location.column), (2, 1));
    }

    #[test]
    fn test_lex_error_surfaces_as_syntax_error() {
        let err = parse("1 + #").unwrap_err();

        assert_eq!(err.message, "Unrecognized character '#'");
        assert_eq!(err.location.column, 5);
    }

    #[test]
    fn test_nesting_limit() {
        let depth = MAX_NESTING_DEPTH;
        let fits = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(parse(&fits).is_ok());

        let too_deep = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
        let err = parse(&too_deep).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
        assert_eq!(err.location.column, depth + 1);
    }

    #[test]
    fn test_assignment_chain_counts_as_nesting() {
        let err = parse(&"a = ".repeat(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
        assert_eq!(err.location.column, 4 * MAX_NESTING_DEPTH + 3);

        let program = parse(&format!("{}1", "a = ".repeat(MAX_NESTING_DEPTH))).unwrap();
        assert_eq!(program.units().len(), 1);
    }

    #[test]
    fn test_nesting_resets_between_groups() {
        let group = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        let source = format!("{} + {}; {}", group, group, group);
        assert!(parse(&source).is_ok());
    }
}

