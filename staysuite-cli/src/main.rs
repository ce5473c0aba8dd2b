//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use staysuite_cli::CliError;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match staysuite_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report_and_exit(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report_and_exit(err: &CliError) -> ! {
    eprintln!("staysuite: {err}");
    std::process::exit(1);
}
