//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Command-driven in-memory directory tree simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "dirscript")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command file to execute (default: commands.txt, configurable)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Name of the root directory (never printed)
    #[arg(long)]
    pub root_name: Option<String>,

    /// Increase verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,
}
