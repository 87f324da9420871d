use crate::interpreter::token::TokenKind;

/// Result type used by the evaluator.
///
/// Every evaluation step returns either a value of type `T` or the
/// `RuntimeError` that stopped the walk.
pub type EvalResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can stop an evaluation.
///
/// These are hard failures. Malformed input is reported through diagnostics
/// before evaluation is ever attempted, so a `RuntimeError` only describes
/// arithmetic faults or an inconsistent tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// The result does not fit in a 32-bit signed integer.
    Overflow {
        /// Position of the operator that overflowed.
        position: usize,
    },
    /// A binary node carries a token that is not an arithmetic operator.
    UnexpectedOperator {
        /// The offending token kind.
        kind:     TokenKind,
        /// Position of the offending token.
        position: usize,
    },
}

impl RuntimeError {
    /// Gets the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::UnexpectedOperator { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
            Self::UnexpectedOperator { kind, position } => {
                write!(f, "Error at position {position}: Unexpected operator <{kind}>.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
