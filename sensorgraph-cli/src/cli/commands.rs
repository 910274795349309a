//! Command implementations and argument parsing for the sensorgraph CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sensorgraph_core::{
    AnalysisBuilder, AnalysisReport, AreaMode, ConflictResolution, DEFAULT_CLASS_LIMIT, Density,
    SensorGraphError,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{benchmark::BenchmarkCase, render::render_text};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sensorgraph",
    about = "Analyse random geometric sensor networks: ordering, colouring and backbones."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Analyse a freshly sampled sensor network.
    Run(RunCommand),
    /// Analyse one of the fixed benchmark configurations.
    Benchmark(BenchmarkCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of sensors to place.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Region the sensors are placed in.
    #[arg(long, value_enum, default_value_t = AreaArg::Square)]
    pub area: AreaArg,

    /// Connection density.
    #[command(flatten)]
    pub density: DensityArgs,

    /// Label for the run (defaults to `run`).
    #[arg(long)]
    pub name: Option<String>,

    /// Analysis tuning.
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Report destination.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by the `benchmark` command.
#[derive(Debug, Args, Clone)]
pub struct BenchmarkCommand {
    /// Benchmark configuration to run.
    #[arg(value_enum)]
    pub case: BenchmarkCase,

    /// Analysis tuning.
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Report destination.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Exactly one of an explicit radius or a target average degree.
#[derive(Debug, Args, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct DensityArgs {
    /// Connect sensors within this distance.
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Derive the radius from this target average degree.
    #[arg(long = "average-degree", allow_negative_numbers = true)]
    pub average_degree: Option<f64>,
}

impl DensityArgs {
    fn density(&self) -> Option<Density> {
        match (self.radius, self.average_degree) {
            (Some(radius), _) => Some(Density::Radius(radius)),
            (None, Some(degree)) => Some(Density::AverageDegree(degree)),
            (None, None) => None,
        }
    }
}

/// Analysis options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct AnalysisArgs {
    /// Seed for sensor placement; a random seed is drawn and reported when
    /// omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How colouring resolves clashes with already coloured neighbours.
    #[arg(long, value_enum, default_value_t = ConflictArg::Recursive)]
    pub conflict_resolution: ConflictArg,

    /// Number of largest colour classes paired when searching for backbones.
    #[arg(long, default_value_t = DEFAULT_CLASS_LIMIT)]
    pub class_limit: usize,
}

impl Default for AnalysisArgs {
    fn default() -> Self {
        Self {
            seed: None,
            conflict_resolution: ConflictArg::Recursive,
            class_limit: DEFAULT_CLASS_LIMIT,
        }
    }
}

/// Report format and destination shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Deployment areas selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AreaArg {
    /// The unit square.
    Square,
    /// The unit disk.
    Disk,
}

impl From<AreaArg> for AreaMode {
    fn from(value: AreaArg) -> Self {
        match value {
            AreaArg::Square => Self::Square,
            AreaArg::Disk => Self::Disk,
        }
    }
}

/// Conflict-resolution strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictArg {
    /// Neighbour-by-neighbour recursive retry. Slow on dense graphs.
    Recursive,
    /// Smallest colour unused by any coloured neighbour.
    ForbiddenSet,
}

impl From<ConflictArg> for ConflictResolution {
    fn from(value: ConflictArg) -> Self {
        match value {
            ConflictArg::Recursive => Self::Recursive,
            ConflictArg::ForbiddenSet => Self::ForbiddenSet,
        }
    }
}

/// Report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The report file could not be created.
    #[error("failed to create `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
    /// Neither a radius nor an average degree was supplied.
    #[error("either --radius or --average-degree is required")]
    MissingDensity,
    /// The analysis rejected its input or detected a broken invariant.
    #[error(transparent)]
    Core(#[from] SensorGraphError),
    /// JSON encoding of the report failed.
    #[error("failed to encode report as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a CLI command, ready to be written.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The analysis report.
    pub report: AnalysisReport,
    /// Requested report format.
    pub format: OutputFormat,
    /// Requested report file, if any.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is invalid or the analysis
/// fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use sensorgraph_cli::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from([
///     "sensorgraph", "run", "--vertices", "50", "--radius", "0.2", "--seed", "3",
/// ]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.graph.vertex_count, 50);
/// assert_eq!(summary.report.seed, Some(3));
/// # Ok::<(), sensorgraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
        Command::Benchmark(benchmark) => {
            Span::current().record("command", field::display("benchmark"));
            run_benchmark(benchmark)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(vertices = command.vertices, area = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        vertices,
        area,
        density,
        name,
        analysis,
        output,
    } = command;
    let area_mode = AreaMode::from(area);
    Span::current().record("area", field::display(area_mode.as_str()));

    let builder = AnalysisBuilder::new()
        .with_vertices(vertices)
        .with_area(area_mode)
        .with_density(density.density().ok_or(CliError::MissingDensity)?)
        .with_run_name(name.unwrap_or_else(|| "run".to_owned()));
    let report = analyse(builder, &analysis)?;
    Ok(ExecutionSummary {
        report,
        format: output.format,
        output: output.output,
    })
}

#[instrument(name = "cli.benchmark", err, skip(command), fields(case = command.case.name()))]
pub(super) fn run_benchmark(command: BenchmarkCommand) -> Result<ExecutionSummary, CliError> {
    let parameters = command.case.parameters();
    let builder = AnalysisBuilder::new()
        .with_vertices(parameters.vertices)
        .with_area(parameters.area)
        .with_density(Density::AverageDegree(parameters.average_degree))
        .with_run_name(command.case.name());
    let report = analyse(builder, &command.analysis)?;
    Ok(ExecutionSummary {
        report,
        format: command.output.format,
        output: command.output.output,
    })
}

fn analyse(builder: AnalysisBuilder, args: &AnalysisArgs) -> Result<AnalysisReport, CliError> {
    let mut tuned = builder
        .with_conflict_resolution(args.conflict_resolution.into())
        .with_class_limit(args.class_limit);
    if let Some(seed) = args.seed {
        tuned = tuned.with_seed(seed);
    }
    let report = tuned.build()?.run()?;
    info!(
        run = report.run_name.as_str(),
        seed = report.seed,
        palette = report.coloring.palette_size,
        "command completed"
    );
    Ok(report)
}

/// Writes the report to the requested file, or to `writer` when no file was
/// requested.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be created,
/// [`CliError::Write`] when writing fails and [`CliError::Serialize`] when
/// JSON encoding fails.
pub fn write_summary(summary: &ExecutionSummary, writer: impl Write) -> Result<(), CliError> {
    match &summary.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            let mut buffered = BufWriter::new(file);
            render_report(&summary.report, summary.format, &mut buffered)?;
            buffered.flush().map_err(CliError::Write)
        }
        None => render_report(&summary.report, summary.format, writer),
    }
}

/// Renders `report` in `format`.
///
/// # Errors
/// Returns [`CliError::Write`] when writing fails and
/// [`CliError::Serialize`] when JSON encoding fails.
pub fn render_report(
    report: &AnalysisReport,
    format: OutputFormat,
    mut writer: impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => render_text(report, &mut writer).map_err(CliError::Write),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer).map_err(CliError::Write)
        }
    }
}
