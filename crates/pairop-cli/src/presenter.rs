//! CLI result presenter.

use std::io::{self, Write};

use tracing::debug;

use crate::output::{format_result, write_line};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a computed result.
    fn present_result(&mut self, result: i32) -> io::Result<()>;

    /// Present a diagnostic message.
    fn present_error(&mut self, message: &str) -> io::Result<()>;
}

/// Presenter that writes CRLF-terminated lines to a writer.
///
/// Both results and diagnostics go to the same writer; the binary passes
/// standard output for both.
pub struct CliResultPresenter<W> {
    out: W,
}

impl<W: Write> CliResultPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for CliResultPresenter<W> {
    fn present_result(&mut self, result: i32) -> io::Result<()> {
        debug!(result, "presenting result");
        write_line(&mut self.out, &format_result(result))
    }

    fn present_error(&mut self, message: &str) -> io::Result<()> {
        debug!(diagnostic = message, "presenting diagnostic");
        write_line(&mut self.out, message)
    }
}
