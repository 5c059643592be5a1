//! pairop library — the argument driver behind the `pairop` binary.

pub mod app;
pub mod config;
pub mod errors;
