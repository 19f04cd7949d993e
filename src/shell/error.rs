use derive_more::Display;
use snafu::Snafu;

use super::Command;

/// The trailing part of a Unix-style error line, e.g. `No such file or directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Reason {
    #[display("No such file or directory")]
    NotFound,
    #[display("Not a directory")]
    NotADirectory,
    #[display("Is a directory")]
    IsADirectory,
    #[display("File exists")]
    FileExists,
    #[display("Directory not empty")]
    DirectoryNotEmpty,
    #[display("Permission denied")]
    PermissionDenied,
}

/// Why a command line failed. The display text is what the user sees.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum CommandError {
    #[snafu(display("Command not recognized: {}", name))]
    NotRecognized { name: String },
    #[snafu(display("{}: missing operand", command))]
    MissingOperand { command: Command },
    #[snafu(display("{}: missing file operand", command))]
    MissingFileOperand { command: Command },
    #[snafu(display("ls: cannot access '{}': {}", path, reason))]
    CannotAccess { path: String, reason: Reason },
    #[snafu(display("cd: {}: {}", path, reason))]
    CannotChangeDirectory { path: String, reason: Reason },
    #[snafu(display("mkdir: cannot create directory '{}': {}", name, reason))]
    CannotCreateDirectory { name: String, reason: Reason },
    #[snafu(display("rm: cannot remove '{}': {}", name, reason))]
    CannotRemove { name: String, reason: Reason },
    #[snafu(display("rmdir: failed to remove '{}': {}", name, reason))]
    CannotRemoveDirectory { name: String, reason: Reason },
    #[snafu(display("cat: {}: {}", name, reason))]
    CannotRead { name: String, reason: Reason },
    #[snafu(display("{}: cannot stat '{}': No such file or directory", command, name))]
    CannotStat { command: Command, name: String },
    #[snafu(display("mv: cannot move '{}' to '{}': File exists", from, to))]
    CannotMove { from: String, to: String },
    #[snafu(display("cp: -r not specified; omitting directory '{}'", name))]
    OmittingDirectory { name: String },
    #[snafu(display("cp: cannot create regular file '{}': File exists", name))]
    CannotCreateFile { name: String },
    #[snafu(display("curl: no URL specified"))]
    NoUrl,
    #[snafu(display("curl: (1) Protocol not supported or disabled in libcurl"))]
    UnsupportedProtocol { url: String },
}
