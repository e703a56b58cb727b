mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use redflag_ai::error::AppError;

/// Parses the command line and dispatches. Only `serve` starts an async runtime, so one-shot
/// commands persist pattern memory inline before the process exits.
pub fn run() -> Result<(), AppError> {
    cli::run()
}
