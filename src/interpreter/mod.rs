//! Expression evaluator
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`engine::Interpreter`] and program-level execution
//! - `expressions`: Dispatch over AST node kinds
//! - `ops`: Arithmetic and variable access
//! - [`environment`]: The variable table
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! The interpreter walks the AST top-down, evaluating each unit of a program
//! in order against one environment. There is a single value type (`i64`) and
//! a single side effect (assignment).

pub mod engine;
pub mod environment;
pub mod errors;
mod expressions;
mod ops;
