//! Application entry point and dispatch.
//!
//! One invocation runs the driver once: `AwaitingValidation` moves to either
//! `Erroring` (diagnostic printed) or `Computing` (result printed), and both
//! are terminal.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use pairop_cli::presenter::{CliResultPresenter, ResultPresenter};
use pairop_core::constants::{exit_codes, DEFAULT_OPERATION};
use pairop_core::operation::Operation;
use pairop_core::parse::parse_leading_int;
use pairop_core::registry::{DefaultFactory, OperationFactory};

use crate::config::Invocation;
use crate::errors::{handle_error, InvocationError};

/// Driver state for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverState {
    /// Initial state; nothing has been inspected yet.
    AwaitingValidation,
    /// The argument count was wrong.
    Erroring(InvocationError),
    /// Both operands parsed, ready to compute.
    Computing { lhs: i32, rhs: i32 },
}

impl DriverState {
    /// Take the single transition out of `AwaitingValidation`.
    ///
    /// Terminal states are returned unchanged.
    #[must_use]
    pub fn advance(self, invocation: &Invocation) -> Self {
        match self {
            Self::AwaitingValidation => match invocation.operands() {
                Ok((lhs, rhs)) => Self::Computing {
                    lhs: parse_leading_int(lhs),
                    rhs: parse_leading_int(rhs),
                },
                Err(err) => Self::Erroring(err),
            },
            terminal => terminal,
        }
    }
}

/// What a completed run printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The diagnostic was printed.
    Diagnostic(InvocationError),
    /// A result was computed and printed.
    Computed(i32),
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Diagnostic(err) => handle_error(err),
            Self::Computed(_) => exit_codes::SUCCESS,
        }
    }
}

/// Run the driver with an injected operation.
pub fn run(
    invocation: &Invocation,
    op: &dyn Operation,
    presenter: &mut dyn ResultPresenter,
) -> Result<Outcome> {
    match DriverState::AwaitingValidation.advance(invocation) {
        DriverState::Erroring(err) => {
            presenter
                .present_error(&err.to_string())
                .context("failed to write diagnostic")?;
            Ok(Outcome::Diagnostic(err))
        }
        DriverState::Computing { lhs, rhs } => {
            debug!(lhs, rhs, operation = op.name(), "computing");
            let result = op.apply(lhs, rhs);
            presenter
                .present_result(result)
                .context("failed to write result")?;
            Ok(Outcome::Computed(result))
        }
        // `advance` always leaves the initial state.
        DriverState::AwaitingValidation => anyhow::bail!("driver did not leave validation"),
    }
}

/// Run the driver with the built-in default operation, writing to `out`.
pub fn run_default<W: Write>(invocation: &Invocation, out: W) -> Result<Outcome> {
    let op = DefaultFactory::new().get(DEFAULT_OPERATION)?;
    let mut presenter = CliResultPresenter::new(out);
    run(invocation, op.as_ref(), &mut presenter)
}

/// Run the driver on `args` and return the captured output and exit code.
pub fn run_captured<I, S>(args: I, op: &dyn Operation) -> Result<(String, u8)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let invocation = Invocation::from_args(args);
    let mut presenter = CliResultPresenter::new(Vec::new());
    let outcome = run(&invocation, op, &mut presenter)?;
    let output = String::from_utf8(presenter.into_inner()).context("output was not UTF-8")?;
    Ok((output, outcome.exit_code()))
}
