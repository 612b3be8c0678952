use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::arena::DirTree;
use crate::errors::{CommandError, CommandResult};

const VERBS: [&str; 4] = ["create", "list", "move", "delete"];

/// Executes command lines against one directory tree and collects the
/// produced output lines: echoed commands, listings, and non-fatal
/// diagnostics, in emission order.
///
/// Fatal errors propagate out of `run` and stop the remaining lines; the
/// output collected up to that point stays available.
#[derive(Debug)]
pub struct Interpreter {
    tree: DirTree,
    out: Vec<String>,
}

impl Interpreter {
    pub fn new(root_name: &str) -> Self {
        Self {
            tree: DirTree::new(root_name),
            out: Vec::new(),
        }
    }

    /// Runs every line in order. Returns on the first fatal error without
    /// executing the rest. The fatal diagnostic is appended to the output
    /// first; the original printed it into the same stream as echoes and
    /// listings before giving up.
    pub fn run<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> CommandResult<()> {
        for line in lines {
            if let Err(problem) = self.execute_line(line) {
                self.out.push(problem.to_string());
                return Err(problem);
            }
        }
        Ok(())
    }

    pub fn output(&self) -> &[String] {
        &self.out
    }

    pub fn into_output(self) -> Vec<String> {
        self.out
    }

    #[instrument(level = "debug", skip(self))]
    fn execute_line(&mut self, line: &str) -> CommandResult<()> {
        let tokens: Vec<&str> = line.split(' ').collect();
        let first = tokens.first().copied().unwrap_or("");
        if first.is_empty() {
            return Err(CommandError::EmptyToken);
        }
        let verb = first.to_lowercase();

        // Unknown verb and too-many-args are validated independently; both
        // diagnostics can fire for the same line. Dispatch is gated on the
        // accumulated result, not short-circuited.
        let mut problems = Vec::new();
        if !VERBS.contains(&verb.as_str()) {
            problems.push(CommandError::UnknownCommand(verb.clone()));
        }
        if tokens.len() >= 4 {
            problems.push(CommandError::TooManyArgs);
        }
        if !problems.is_empty() {
            for problem in problems {
                warn!(%line, "skipping command: {problem}");
                self.out.push(problem.to_string());
            }
            return Ok(());
        }

        // Accepted commands are echoed verbatim before they execute.
        self.out.push(line.to_string());
        debug!(%verb, "executing command");

        match verb.as_str() {
            "create" => self.exec_create(&tokens),
            "list" => {
                self.exec_list();
                Ok(())
            }
            "move" => self.exec_move(&tokens),
            "delete" => self.exec_delete(&tokens),
            _ => unreachable!("verb validated above"),
        }
    }

    fn exec_create(&mut self, tokens: &[&str]) -> CommandResult<()> {
        let path = required_arg(tokens, 1, "create")?;
        let segments: Vec<&str> = path.split('/').collect();

        if segments.len() == 1 {
            self.tree.create_child(self.tree.root(), path);
            return Ok(());
        }

        // Only the immediate parent segment is resolved; longer chains are
        // never checked for connectivity.
        let parent_name = segments[segments.len() - 2];
        let leaf = segments[segments.len() - 1];
        match self.tree.find_by_name(parent_name) {
            Some(parent) => {
                self.tree.create_child(parent, leaf);
                Ok(())
            }
            None => Err(CommandError::MissingParent {
                path: path.to_string(),
                parent: parent_name.to_string(),
            }),
        }
    }

    fn exec_list(&mut self) {
        self.tree.sort_recursive();
        for (_, depth, node) in self.tree.iter() {
            self.out.push(format!("{}{}", "  ".repeat(depth), node.name));
        }
    }

    fn exec_move(&mut self, tokens: &[&str]) -> CommandResult<()> {
        let path = required_arg(tokens, 1, "move")?;
        let dest_name = required_arg(tokens, 2, "move")?;
        let segments: Vec<&str> = path.split('/').collect();

        let destination = self
            .tree
            .find_by_name(dest_name)
            .ok_or_else(|| CommandError::UnknownDirectory(dest_name.to_string()))?;

        if segments.len() == 1 {
            let source = self
                .tree
                .find_by_name(path)
                .ok_or_else(|| CommandError::UnknownDirectory(path.to_string()))?;
            self.tree.copy_under(source, destination);
            // This branch always detaches from the root's children, even
            // when the source lives deeper in the tree.
            self.tree.remove_child(self.tree.root(), path);
        } else {
            let parent_name = segments[segments.len() - 2];
            let leaf = segments[segments.len() - 1];
            let parent = self
                .tree
                .find_by_name(parent_name)
                .ok_or_else(|| CommandError::UnknownDirectory(parent_name.to_string()))?;
            let source = self
                .tree
                .find_by_name(leaf)
                .ok_or_else(|| CommandError::UnknownDirectory(leaf.to_string()))?;
            self.tree.copy_under(source, destination);
            self.tree.remove_child(parent, leaf);
        }
        Ok(())
    }

    fn exec_delete(&mut self, tokens: &[&str]) -> CommandResult<()> {
        let path = required_arg(tokens, 1, "delete")?;
        let segments: Vec<&str> = path.split('/').collect();

        if segments.len() == 1 {
            // Silent no-op when nothing at the root matches
            self.tree.remove_child(self.tree.root(), path);
            return Ok(());
        }

        // Only the first segment is validated, and only against the root's
        // immediate children. The actual deletion target below is resolved
        // independently.
        let first = segments[0];
        if !self.tree.has_child(self.tree.root(), first) {
            let problem = CommandError::MissingPath {
                path: segments.iter().join("/"),
                segment: first.to_string(),
            };
            warn!("skipping command: {problem}");
            self.out.push(problem.to_string());
            return Ok(());
        }

        let parent_name = segments[segments.len() - 2];
        let leaf = segments[segments.len() - 1];
        let parent = self
            .tree
            .find_by_name(parent_name)
            .ok_or_else(|| CommandError::UnknownDirectory(parent_name.to_string()))?;
        self.tree.remove_child(parent, leaf);
        Ok(())
    }
}

fn required_arg<'a>(tokens: &[&'a str], pos: usize, verb: &str) -> CommandResult<&'a str> {
    tokens
        .get(pos)
        .copied()
        .ok_or_else(|| CommandError::MissingArgument {
            verb: verb.to_string(),
        })
}
