pub mod arena;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod interpreter;
pub mod util;

pub use arena::{DirNode, DirTree};
pub use errors::{CommandError, CommandResult};
pub use interpreter::Interpreter;
