//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{Cli, CliError, RunCommand, TimeUnitArg, run_cli};

pub(super) const SQUARE_AND_SPLIT: &str = r#"{
    "graphs": [
        {
            "name": "square",
            "vertices": 4,
            "edges": [
                {"source": 0, "destination": 1, "weight": 10},
                {"source": 0, "destination": 2, "weight": 6},
                {"source": 0, "destination": 3, "weight": 5},
                {"source": 1, "destination": 3, "weight": 15},
                {"source": 2, "destination": 3, "weight": 4}
            ]
        },
        {
            "name": "split",
            "vertices": 3,
            "edges": [{"source": 0, "destination": 1, "weight": 5}]
        },
        {
            "name": "negative",
            "vertices": 2,
            "edges": [{"source": 0, "destination": 1, "weight": -3}]
        }
    ]
}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_args(input: PathBuf, output: Option<PathBuf>) -> RunCommand {
    RunCommand {
        input,
        output,
        time_unit: TimeUnitArg::Millis,
        name: None,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
