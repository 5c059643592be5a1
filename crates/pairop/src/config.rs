//! Application configuration from the process arguments.
//!
//! The invocation is the only input `pairop` takes. There are no flags:
//! every argument, including ones that start with `-`, is positional text.

use pairop_core::constants::EXPECTED_ARG_COUNT;

use crate::errors::InvocationError;

/// The ordered command-line arguments of one run, program name first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Read the arguments of the current process.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily. Any numeric
    /// prefix is ASCII, so parsing is unaffected.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Build an invocation from explicit arguments.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of arguments, program name included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The two operand texts, left then right.
    ///
    /// The count is checked before anything else is looked at.
    pub fn operands(&self) -> Result<(&str, &str), InvocationError> {
        if self.args.len() != EXPECTED_ARG_COUNT {
            return Err(InvocationError::ArgumentCount {
                expected: EXPECTED_ARG_COUNT,
                actual: self.args.len(),
            });
        }
        Ok((&self.args[1], &self.args[2]))
    }
}
