use crate::filesystem::FileSystem;

use super::error::CommandError;

/// Output value that asks the front-end to erase its display history.
pub const CLEAR_SENTINEL: &str = "\u{1b}[CLEAR]";

/// Start and end of the marker wrapped around directory names in listings.
pub const DIRECTORY_MARKER_START: &str = "\u{1b}[1;34m";
pub const DIRECTORY_MARKER_END: &str = "\u{1b}[0m";

/// What a command line hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub output: String,
    pub error: bool,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        CommandOutput {
            output: output.into(),
            error: false,
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        CommandOutput {
            output: output.into(),
            error: true,
        }
    }

    pub fn clear() -> Self {
        Self::success(CLEAR_SENTINEL)
    }

    pub fn is_clear(&self) -> bool {
        !self.error && self.output == CLEAR_SENTINEL
    }
}

impl From<CommandError> for CommandOutput {
    fn from(error: CommandError) -> Self {
        CommandOutput::failure(error.to_string())
    }
}

/// The state to install after a command, together with what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FileSystem,
    pub output: CommandOutput,
}

impl Transition {
    pub fn new(state: FileSystem, output: CommandOutput) -> Self {
        Transition { state, output }
    }

    /// Keeps `state` as it is.
    pub fn unchanged(state: &FileSystem, output: CommandOutput) -> Self {
        Self::new(state.clone(), output)
    }

    pub fn silent(state: FileSystem) -> Self {
        Self::new(state, CommandOutput::default())
    }
}
