use crate::filesystem::FileSystem;
use crate::shell::Command;
use crate::shell::output::{CommandOutput, Transition};

pub fn help(fs: &FileSystem) -> Transition {
    let usage = Command::ALL
        .iter()
        .map(|command| format!("  {}", command.usage()))
        .collect::<Vec<_>>()
        .join("\n");
    let text = format!(
        "Available commands:\n{usage}\n\n\
Paths given to ls and cd may be absolute or relative and may use . and ..\n\
The other commands take names of entries in the current directory."
    );
    Transition::unchanged(fs, CommandOutput::success(text))
}

pub fn clear(fs: &FileSystem) -> Transition {
    Transition::unchanged(fs, CommandOutput::clear())
}
