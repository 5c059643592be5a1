//! # pairop-cli
//!
//! Output formatting and result presentation.

pub mod output;
pub mod presenter;

pub use presenter::{CliResultPresenter, ResultPresenter};
