//! Command execution: resolve the command file, run the interpreter, print.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::interpreter::Interpreter;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let path = command_file(cli, &settings);
    let root_name = cli.root_name.as_deref().unwrap_or(&settings.root_name);
    debug!(?path, %root_name, "running command file");

    let text = read_command_file(&path)?;
    if text.lines().next().is_none() {
        warn!(?path, "no commands found in command file");
    }

    let mut interpreter = Interpreter::new(root_name);
    let outcome = interpreter.run(text.lines());

    // Everything produced before a fatal command still gets printed.
    for line in interpreter.output() {
        output::info(line);
    }

    outcome.map_err(CliError::from)
}

/// CLI override wins over the configured default.
pub fn command_file(cli: &Cli, settings: &Settings) -> PathBuf {
    cli.file
        .clone()
        .unwrap_or_else(|| settings.command_file.clone())
}

/// Reads the whole command file eagerly; the script format is small by
/// construction, no streaming needed.
#[instrument(level = "debug")]
pub fn read_command_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::CommandFile {
        path: path.to_path_buf(),
        source,
    })
}
