//! Pipeline-level error type
//!
//! [`Error`] unites the failures of the two stages so that callers running
//! parse-then-evaluate in one step get a single type to report. Every
//! variant carries a source location.

use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::SourceLocation;
use crate::parser::lexer::SyntaxError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lexing or parsing failed
    Syntax(SyntaxError),
    /// Evaluation failed
    Runtime(RuntimeError),
}

impl Error {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Error::Syntax(err) => &err.location,
            Error::Runtime(err) => err.location(),
        }
    }

    /// The diagnostic text without the location prefix
    pub fn message(&self) -> String {
        match self {
            Error::Syntax(err) => err.message.clone(),
            Error::Runtime(err) => err.message(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(err) => Some(err),
            Error::Runtime(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}
