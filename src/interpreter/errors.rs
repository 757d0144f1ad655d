//! Runtime error types for the evaluator
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while evaluating a parsed program (as opposed to syntax errors).
//!
//! All runtime errors are fatal - they halt evaluation of the current run.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Runtime errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Undefined variable reference
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    /// Division by zero
    DivisionByZero { location: SourceLocation },
}

impl RuntimeError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            RuntimeError::UndefinedVariable { location, .. } => location,
            RuntimeError::DivisionByZero { location } => location,
        }
    }

    /// The diagnostic text without the location prefix
    pub fn message(&self) -> String {
        match self {
            RuntimeError::UndefinedVariable { name, .. } => {
                format!("Undefined variable '{}'", name)
            }
            RuntimeError::DivisionByZero { .. } => "Division by zero".to_string(),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message())
    }
}

impl std::error::Error for RuntimeError {}
