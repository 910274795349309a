//! Small helpers shared across CLI tests.

use tempfile::TempDir;

use super::{
    AnalysisArgs, AreaArg, Cli, CliError, Command, DensityArgs, ExecutionSummary, OutputArgs,
    RunCommand, run_cli, write_summary,
};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// A seeded `run` command over `vertices` sensors at `radius`.
pub(super) fn seeded_run(vertices: usize, radius: f64, seed: u64) -> RunCommand {
    RunCommand {
        vertices,
        area: AreaArg::Square,
        density: DensityArgs {
            radius: Some(radius),
            average_degree: None,
        },
        name: Some("test".to_owned()),
        analysis: AnalysisArgs {
            seed: Some(seed),
            ..AnalysisArgs::default()
        },
        output: OutputArgs::default(),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_to_summary(command: RunCommand) -> ExecutionSummary {
    run_cli(Cli {
        command: Command::Run(command),
    })
    .unwrap_or_else(|err| panic!("run must succeed: {err}"))
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    write_summary(summary, &mut buffer).unwrap_or_else(|err| panic!("render must succeed: {err}"));
    String::from_utf8(buffer).unwrap_or_else(|err| panic!("report must be UTF-8: {err}"))
}
