//! Expression source parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (characters → tokens), with lookahead
//! - [`parse`]: The [`parse::Parser`] struct and program-level parsing
//! - `expressions`: The `E`, `T` and `F` grammar rules
//! - [`fold`]: Left-associative folding of operator continuations
//! - [`ast`]: AST node definitions
//!
//! # Grammar
//!
//! ```text
//! Program  -> Unit (';' Unit)*
//! Unit     -> E
//! E        -> T (('+' | '-') T)*
//! T        -> F (('*' | '/') F)*
//! F        -> INTEGER | IDENTIFIER | '(' E ')' | IDENTIFIER '=' E
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent driven by at most two tokens of lookahead.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod fold;
pub mod lexer;
pub mod parse;
