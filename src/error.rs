//! Error types for benchmark runs

use thiserror::Error;

/// Failure of a single `execute` call.
///
/// `E` is the error type of the bench methods. Operation errors are carried
/// as-is so the caller gets back exactly what the bench method returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExecuteError<E> {
    #[error("Invalid argument: operations must be greater than 0 (got {operations})")]
    InvalidArgument { operations: i64 },

    #[error("Bench operation failed: {0}")]
    Operation(#[source] E),
}

impl<E> ExecuteError<E> {
    /// Returns the bench method's error, if that is what stopped the run.
    pub fn into_operation(self) -> Option<E> {
        match self {
            ExecuteError::Operation(e) => Some(e),
            ExecuteError::InvalidArgument { .. } => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ExecuteError::InvalidArgument { .. })
    }
}
