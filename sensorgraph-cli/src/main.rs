//! CLI entry point for sensor network analysis.
//!
//! Parses arguments with clap, runs the requested analysis, writes the report
//! and maps failures to a non-zero exit code. Logging is initialised first so
//! every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sensorgraph_cli::{
    cli::{Cli, CliError, run_cli, write_summary},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_summary(&summary, &mut writer).context("failed to write report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let core_error = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(source) => Some(source),
                _ => None,
            });
        let code = core_error.map(|source| field::display(source.code().as_str()));
        let stage_code = core_error.and_then(|source| {
            source
                .ordering_code()
                .map(|ordering| ordering.as_str())
                .or_else(|| source.coloring_code().map(|coloring| coloring.as_str()))
                .map(field::display)
        });

        error!(
            error = %err,
            code = code,
            stage_code = stage_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
