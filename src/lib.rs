//! # Introduction
//!
//! minicalc tokenizes, parses and evaluates a small integer expression
//! language with variables:
//!
//! ```text
//! x = 5; y = x * (x - 1); y / 2
//! ```
//!
//! ## Execution pipeline
//!
//! ```text
//! Characters → Lexer → Parser → AST → Interpreter → (result, environment)
//! ```
//!
//! 1. [`parser`]: tokenises the source lazily and builds an AST, folding
//!    operator chains so `+ - * /` are left-associative.
//! 2. [`interpreter`]: walks the AST against a flat variable
//!    [`interpreter::environment::Environment`].
//! 3. [`error`]: the [`Error`] type that unites syntax and runtime failures.
//!
//! ## Example
//!
//! ```
//! assert_eq!(minicalc::evaluate_source("x = 5; x + 1", "<example>"), Ok(6));
//! assert_eq!(minicalc::evaluate_source("8 - 4 - 2", "<example>"), Ok(2));
//! ```

pub mod error;
pub mod interpreter;
pub mod parser;

pub use error::Error;

use interpreter::engine::Interpreter;
use parser::ast::Program;
use parser::lexer::{Lexer, SyntaxError, Token};
use parser::parse::Parser;

/// Tokenize a whole source string.
pub fn tokenize_source(source: &str, filename: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::from_source(source, filename).tokenize()
}

/// Parse a source string into a [`Program`] without evaluating it.
pub fn parse_source(source: &str, filename: &str) -> Result<Program, SyntaxError> {
    Parser::from_source(source, filename).parse_program()
}

/// Parse and evaluate a source string with a fresh environment.
pub fn evaluate_source(source: &str, filename: &str) -> Result<i64, Error> {
    let program = parse_source(source, filename)?;
    Ok(Interpreter::new().run(&program)?)
}
