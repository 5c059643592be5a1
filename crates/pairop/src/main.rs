//! pairop — apply a two-operand integer operation to the command line.

use std::io;
use std::process::ExitCode;

use pairop_core::constants::exit_codes;
use pairop_lib::{app, config};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let invocation = config::Invocation::from_env();
    match app::run_default(&invocation, io::stdout().lock()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            tracing::warn!("{err:#}");
            ExitCode::from(exit_codes::SUCCESS)
        }
    }
}
