use tracing::debug;

use crate::filesystem::FileSystem;

use super::Command;
use super::output::{CommandOutput, Transition};

/// A command line split into its name and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Splits on runs of whitespace. Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        Some(CommandLine {
            name,
            args: tokens.collect(),
        })
    }
}

/// Runs one command line against `state`.
///
/// This is a pure function of its inputs: the returned transition holds the
/// state to install next, which is `state` itself whenever the command fails
/// or only reads.
pub fn execute(state: &FileSystem, line: &str) -> Transition {
    let Some(command_line) = CommandLine::parse(line) else {
        return Transition::unchanged(state, CommandOutput::default());
    };
    debug!(
        "Executing '{}' with {} argument(s)",
        command_line.name,
        command_line.args.len()
    );

    let result = command_line
        .name
        .parse::<Command>()
        .and_then(|command| command.run(state, &command_line.args));

    match result {
        Ok(transition) => transition,
        Err(error) => {
            debug!("Command failed: {}", error);
            Transition::unchanged(state, error.into())
        }
    }
}
