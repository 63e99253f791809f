//! Command-line interface for the Prim versus Kruskal benchmark.
//!
//! `run` benchmarks a JSON dataset and `generate` writes the standard
//! synthetic suite as a dataset.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, RunCommand, TimeUnitArg,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
