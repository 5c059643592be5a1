//! Error handling and exit codes.

use pairop_core::constants::{exit_codes, ARGUMENT_COUNT_MESSAGE};

/// Errors detected while validating the invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    /// The invocation did not carry exactly two operands.
    ///
    /// Displays as the fixed diagnostic text, without the line terminator.
    #[error("{message}", message = ARGUMENT_COUNT_MESSAGE)]
    ArgumentCount { expected: usize, actual: usize },
}

/// Handle an invocation error and return the process exit code.
///
/// The diagnostic path is not distinguished from success by exit status.
pub fn handle_error(err: &InvocationError) -> u8 {
    match err {
        InvocationError::ArgumentCount { expected, actual } => {
            tracing::debug!(expected, actual, "wrong argument count");
            exit_codes::SUCCESS
        }
    }
}
