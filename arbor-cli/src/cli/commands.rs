//! Command implementations and argument parsing for the `arbor` CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    BenchmarkBuilder, BenchmarkReport, GraphComparison, GraphOutcome, GraphSource, TimeUnit,
    Winner, generator,
};
use arbor_providers_json::{JsonDatasetProvider, JsonProviderError, write_dataset, write_results};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Compare Prim's and Kruskal's MST algorithms.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Benchmark both algorithms on every graph of a JSON dataset.
    Run(RunCommand),
    /// Write the standard synthetic suite as a JSON dataset.
    Generate(GenerateCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON dataset to benchmark.
    pub input: PathBuf,

    /// Where to write the JSON results document.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Unit used for reported durations.
    #[arg(long = "time-unit", value_enum, default_value_t = TimeUnitArg::Millis)]
    pub time_unit: TimeUnitArg,

    /// Override name for the dataset (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Path of the dataset to write.
    pub output: PathBuf,
}

/// Time units selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeUnitArg {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
}

impl From<TimeUnitArg> for TimeUnit {
    fn from(value: TimeUnitArg) -> Self {
        match value {
            TimeUnitArg::Nanos => Self::Nanos,
            TimeUnitArg::Micros => Self::Micros,
            TimeUnitArg::Millis => Self::Millis,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be opened, created or flushed.
    #[error("i/o failure on `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input dataset could not be parsed.
    #[error("failed to read dataset `{path}`: {source}")]
    Dataset {
        /// Dataset path.
        path: PathBuf,
        /// Provider error.
        #[source]
        source: JsonProviderError,
    },
    /// A result or dataset document could not be written.
    #[error("failed to write `{path}`: {source}")]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Provider error.
        #[source]
        source: JsonProviderError,
    },
}

impl CliError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Dataset { .. } => "CLI_DATASET",
            Self::Output { .. } => "CLI_OUTPUT",
        }
    }
}

/// Outcome of a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A dataset was benchmarked.
    Benchmark(BenchmarkReport),
    /// A dataset was generated.
    Generated {
        /// Where the dataset was written.
        path: PathBuf,
        /// Number of graphs in the dataset.
        graphs: usize,
    },
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a file cannot be read or written, or the input
/// is not a dataset. Malformed graphs inside a dataset are skipped, not
/// errors.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, ExecutionSummary, RunCommand, TimeUnitArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"vertices": 3, "edges": [
///         {"source": 0, "destination": 1, "weight": 2},
///         {"source": 1, "destination": 2, "weight": 3}
///     ]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///         time_unit: TimeUnitArg::Micros,
///         name: None,
///     }),
/// };
/// let ExecutionSummary::Benchmark(report) = run_cli(cli)? else {
///     panic!("run produces a benchmark report");
/// };
/// assert_eq!(report.comparisons().count(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run)
        }
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            generate_command(&generate)
        }
    }
}

#[instrument(
    name = "cli.benchmark",
    err,
    skip(command),
    fields(input = %command.input.display(), time_unit = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let time_unit = TimeUnit::from(command.time_unit);
    Span::current().record("time_unit", field::display(time_unit));

    let name = derive_source_name(&command.input, command.name.as_deref());
    let reader = open_dataset(&command.input)?;
    let provider =
        JsonDatasetProvider::from_reader(name, reader).map_err(|source| CliError::Dataset {
            path: command.input.clone(),
            source,
        })?;

    let report = BenchmarkBuilder::new()
        .with_time_unit(time_unit)
        .build()
        .run(&provider);

    if let Some(output) = &command.output {
        write_document(output, |writer| write_results(writer, &report))?;
    }

    info!(
        source = provider.name(),
        compared = report.comparisons().count(),
        skipped = report.skipped().count(),
        "benchmark completed"
    );
    Ok(ExecutionSummary::Benchmark(report))
}

#[instrument(name = "cli.generate", err, skip(command), fields(output = %command.output.display()))]
pub(super) fn generate_command(command: &GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let suite = generator::standard_suite();
    write_document(&command.output, |writer| write_dataset(writer, &suite))?;
    info!(graphs = suite.len(), "dataset generated");
    Ok(ExecutionSummary::Generated {
        path: command.output.clone(),
        graphs: suite.len(),
    })
}

fn open_dataset(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn write_document<F>(path: &Path, write: F) -> Result<(), CliError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), JsonProviderError>,
{
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|source| CliError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "dataset".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as a human-readable report.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated { path: "suite.json".into(), graphs: 17 };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "wrote 17 graphs to suite.json\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Benchmark(report) => render_report(report, &mut writer),
        ExecutionSummary::Generated { path, graphs } => {
            writeln!(writer, "wrote {graphs} graphs to {}", path.display())
        }
    }
}

fn render_report(report: &BenchmarkReport, writer: &mut impl Write) -> io::Result<()> {
    let unit = report.time_unit();
    writeln!(writer, "source: {}", report.source())?;
    for outcome in report.outcomes() {
        match outcome {
            GraphOutcome::Compared(comparison) => render_comparison(comparison, unit, writer)?,
            GraphOutcome::Skipped(skipped) => {
                writeln!(writer, "skipped {}: {}", skipped.name, skipped.reason)?;
            }
        }
    }

    let Some(summary) = report.summary() else {
        return writeln!(writer, "no graphs compared");
    };
    writeln!(
        writer,
        "graphs analysed: {} ({} agreeing, {} skipped)",
        summary.graphs_analysed, summary.costs_agreeing, summary.graphs_skipped
    )?;
    writeln!(writer, "mean prim: {:.3} {unit}", unit.fractional(summary.mean_prim))?;
    writeln!(
        writer,
        "mean kruskal: {:.3} {unit}",
        unit.fractional(summary.mean_kruskal)
    )?;
    match summary.winner {
        Winner::Tie => writeln!(writer, "faster: tie"),
        winner => writeln!(writer, "faster: {winner} by {:.2}%", summary.margin_percent),
    }
}

fn render_comparison(
    comparison: &GraphComparison,
    unit: TimeUnit,
    writer: &mut impl Write,
) -> io::Result<()> {
    let prim = comparison.prim();
    let kruskal = comparison.kruskal();
    writeln!(
        writer,
        "{}: {} vertices, {} edges",
        comparison.name(),
        comparison.vertices(),
        comparison.edges()
    )?;
    writeln!(
        writer,
        "  prim: cost {}, {} {unit}, {} comparisons, {} operations",
        prim.total_cost(),
        unit.convert(prim.elapsed()),
        prim.counters().comparisons,
        prim.counters().operations
    )?;
    writeln!(
        writer,
        "  kruskal: cost {}, {} {unit}, {} comparisons, {} unions",
        kruskal.total_cost(),
        unit.convert(kruskal.elapsed()),
        kruskal.counters().comparisons,
        kruskal.counters().unions
    )?;
    let verdict = if comparison.costs_agree() { "yes" } else { "NO" };
    writeln!(writer, "  costs agree: {verdict}")
}
