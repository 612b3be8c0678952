use thiserror::Error;

/// Everything that can go wrong while executing one command line.
///
/// The Display strings of the non-fatal variants are the diagnostic lines
/// that end up in the interpreter's output, interleaved with echoes and
/// listings. Fatal variants abort the run instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Empty or missing first token on a line
    #[error("error reading commands: empty command token")]
    EmptyToken,

    #[error("error unknown command input {0} detected, ignoring")]
    UnknownCommand(String),

    #[error("error too many args passed with command, ignoring")]
    TooManyArgs,

    /// create: the second-to-last path segment resolves nowhere in the tree
    #[error("cannot create directory with relationship: {path} because {parent} was not found")]
    MissingParent { path: String, parent: String },

    /// delete: the first path segment is not an immediate child of the root
    #[error("Cannot delete {path} - {segment} does not exist")]
    MissingPath { path: String, segment: String },

    #[error("error missing argument for command {verb}")]
    MissingArgument { verb: String },

    /// move: a source, destination, or parent lookup resolved nowhere
    #[error("error no directory named {0} found")]
    UnknownDirectory(String),
}

pub type CommandResult<T> = Result<T, CommandError>;

impl CommandError {
    /// Fatal errors abort the whole run; the rest skip one command.
    pub fn is_fatal(&self) -> bool {
        match self {
            CommandError::EmptyToken
            | CommandError::MissingParent { .. }
            | CommandError::MissingArgument { .. }
            | CommandError::UnknownDirectory(_) => true,
            CommandError::UnknownCommand(_)
            | CommandError::TooManyArgs
            | CommandError::MissingPath { .. } => false,
        }
    }
}
