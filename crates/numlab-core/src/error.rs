use std::error::Error;
use std::fmt;

/// Failure taxonomy for snippet evaluation.
///
/// Every failure a snippet can produce falls into one of these four
/// conditions. Nothing in the library catches them; they propagate to the
/// runner, which reports them verbatim and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An undefined variable, function, or key was referenced.
    NameNotFound(String),
    /// An operation was applied to a value that does not support it.
    TypeMismatch { op: String, found: String },
    /// Element access beyond the bounds of a container.
    IndexOutOfRange { index: i64, len: usize },
    /// Division by zero and kin.
    Arithmetic(String),
}

impl EvalError {
    /// Build a `TypeMismatch` from an operation name and a description of
    /// the offending operand kinds.
    pub fn mismatch(op: &str, found: impl Into<String>) -> Self {
        EvalError::TypeMismatch {
            op: op.to_string(),
            found: found.into(),
        }
    }

    pub fn arithmetic(msg: impl Into<String>) -> Self {
        EvalError::Arithmetic(msg.into())
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::NameNotFound(name) => {
                write!(f, "NameNotFound: name '{}' is not defined", name)
            }
            EvalError::TypeMismatch { op, found } => {
                write!(f, "TypeMismatch: unsupported operand type(s) for {}: {}", op, found)
            }
            EvalError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "IndexOutOfRange: index {} is out of range for length {}",
                    index, len
                )
            }
            EvalError::Arithmetic(msg) => write!(f, "ArithmeticError: {}", msg),
        }
    }
}

impl Error for EvalError {}
