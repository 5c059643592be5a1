//! Constants for argument validation, output framing, and exit status.

/// Expected length of the invocation: program name plus two operands.
pub const EXPECTED_ARG_COUNT: usize = 3;

/// Diagnostic printed when the invocation does not carry exactly two operands.
pub const ARGUMENT_COUNT_MESSAGE: &str = "Only two arguments should be passed on the command line!";

/// Terminator appended to every line written to standard output.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Name of the operation linked into the `pairop` binary.
pub const DEFAULT_OPERATION: &str = "add";

/// Process exit codes.
///
/// Every branch of the driver, including the diagnostic path, exits with
/// [`exit_codes::SUCCESS`].
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
}
