//! Command-line interface for sensor network analysis.
//!
//! `run` samples a network from explicit parameters; `benchmark` runs one of
//! the fixed configurations. Both produce an [`ExecutionSummary`] that
//! [`write_summary`] renders as text or JSON.

mod benchmark;
mod commands;
mod render;

pub use benchmark::{BenchmarkCase, BenchmarkParameters};
pub use commands::{
    AnalysisArgs, AreaArg, BenchmarkCommand, Cli, CliError, Command, ConflictArg, DensityArgs,
    ExecutionSummary, OutputArgs, OutputFormat, RunCommand, render_report, run_cli,
    write_summary,
};
pub use render::render_text;

#[cfg(test)]
mod test_helpers;
