//! # pairop-core
//!
//! Core library for `pairop`: the leading-numeral parser, the `Operation`
//! seam with its built-in implementations, and the operation registry.

pub mod constants;
pub mod operation;
pub mod parse;
pub mod registry;

// Re-exports
pub use constants::{
    exit_codes, ARGUMENT_COUNT_MESSAGE, DEFAULT_OPERATION, EXPECTED_ARG_COUNT, LINE_TERMINATOR,
};
pub use operation::{Add, FnOperation, Multiply, Operation, Subtract};
pub use parse::parse_leading_int;
pub use registry::{DefaultFactory, OperationError, OperationFactory};

