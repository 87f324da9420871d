/// Scanner and parser diagnostics.
///
/// Diagnostics describe malformed input: unknown characters, integer literals
/// that do not fit, and tokens the parser did not expect. They are collected
/// rather than raised, so a single line can report several of them.
pub mod diagnostic;
/// Runtime errors.
///
/// Contains the hard failures that can stop an evaluation: division by zero,
/// integer overflow and operators the evaluator does not know.
pub mod runtime_error;

use std::fmt;

pub use diagnostic::Diagnostic;
pub use runtime_error::{EvalResult, RuntimeError};

/// Everything that can keep a line from producing a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReckonError {
    /// The line was malformed; evaluation was not attempted.
    Diagnostics(Vec<Diagnostic>),
    /// The line parsed cleanly but evaluating it failed.
    Runtime(RuntimeError),
}

impl fmt::Display for ReckonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostics(diagnostics) => {
                for (i, diagnostic) in diagnostics.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{diagnostic}")?;
                }
                Ok(())
            },
            Self::Runtime(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ReckonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Diagnostics(_) => None,
            Self::Runtime(err) => Some(err),
        }
    }
}

impl From<RuntimeError> for ReckonError {
    fn from(err: RuntimeError) -> Self {
        Self::Runtime(err)
    }
}
