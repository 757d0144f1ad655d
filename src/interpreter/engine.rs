// Execution engine for the expression interpreter

use crate::interpreter::environment::Environment;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::Program;
use tracing::debug;

/// Tree-walking interpreter holding the variable environment
///
/// The environment outlives a single [`Interpreter::run`]: running several
/// programs on the same interpreter lets later ones see earlier bindings.
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(crate) env: Environment,
}

impl Interpreter {
    /// Create an interpreter with an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter that starts from existing bindings
    pub fn with_environment(env: Environment) -> Self {
        Interpreter { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    /// Evaluate every unit in order; the result is the value of the last one.
    pub fn run(&mut self, program: &Program) -> Result<i64, RuntimeError> {
        let mut result = 0;
        for (index, unit) in program.units().iter().enumerate() {
            result = self.evaluate_expr(unit)?;
            debug!(unit = index, result, "evaluated unit");
        }
        Ok(result)
    }
}
