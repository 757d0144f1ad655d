//! Variable reads and writes
//!
//! The language has one flat table of integer variables, so an assignment
//! target is always a plain name and a read either finds a binding or fails.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::SourceLocation;
use tracing::debug;

impl Interpreter {
    /// Bind `name` to `value` and return the value, which is also the result
    /// of the assignment expression.
    pub(crate) fn assign_variable(&mut self, name: &str, value: i64) -> i64 {
        let previous = self.env.assign(name, value);
        debug!(name, value, ?previous, "assigned variable");
        value
    }

    pub(crate) fn lookup_variable(
        &self,
        name: &str,
        location: &SourceLocation,
    ) -> Result<i64, RuntimeError> {
        self.env
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
                location: location.clone(),
            })
    }
}
