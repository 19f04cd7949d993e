use std::str::FromStr;

use derive_more::Display;

use crate::filesystem::FileSystem;

use super::commands::{files, navigation, network, screen};
use super::error::CommandError;
use super::output::Transition;

/// Every command the shell understands. Displays as the name the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Command {
    #[display("help")]
    Help,
    #[display("clear")]
    Clear,
    #[display("pwd")]
    Pwd,
    #[display("ls")]
    Ls,
    #[display("cd")]
    Cd,
    #[display("mkdir")]
    Mkdir,
    #[display("touch")]
    Touch,
    #[display("rm")]
    Rm,
    #[display("rmdir")]
    Rmdir,
    #[display("cat")]
    Cat,
    #[display("mv")]
    Mv,
    #[display("cp")]
    Cp,
    #[display("curl")]
    Curl,
}

impl Command {
    pub const ALL: [Command; 13] = [
        Command::Help,
        Command::Clear,
        Command::Pwd,
        Command::Ls,
        Command::Cd,
        Command::Mkdir,
        Command::Touch,
        Command::Rm,
        Command::Rmdir,
        Command::Cat,
        Command::Mv,
        Command::Cp,
        Command::Curl,
    ];

    /// Runs the command against `fs`. Validation happens before any commit, so
    /// an error always means `fs` is the state to keep.
    pub fn run(self, fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
        match self {
            Command::Help => Ok(screen::help(fs)),
            Command::Clear => Ok(screen::clear(fs)),
            Command::Pwd => Ok(navigation::pwd(fs)),
            Command::Ls => navigation::ls(fs, args),
            Command::Cd => navigation::cd(fs, args),
            Command::Mkdir => files::mkdir(fs, args),
            Command::Touch => files::touch(fs, args),
            Command::Rm => files::rm(fs, args),
            Command::Rmdir => files::rmdir(fs, args),
            Command::Cat => files::cat(fs, args),
            Command::Mv => files::mv(fs, args),
            Command::Cp => files::cp(fs, args),
            Command::Curl => network::curl(fs, args),
        }
    }

    /// Usage line shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Help => "help                 Show this help message",
            Command::Clear => "clear                Clear the terminal screen",
            Command::Pwd => "pwd                  Print the working directory",
            Command::Ls => "ls [path]            List directory contents",
            Command::Cd => "cd [path]            Change directory (no path: home)",
            Command::Mkdir => "mkdir <name>         Create a directory",
            Command::Touch => "touch <name>         Create a file or update its timestamp",
            Command::Rm => "rm <name>            Remove a file",
            Command::Rmdir => "rmdir <name>         Remove an empty directory",
            Command::Cat => "cat <name>           Print file contents",
            Command::Mv => "mv <source> <dest>   Rename a file or directory",
            Command::Cp => "cp <source> <dest>   Copy a file",
            Command::Curl => "curl <url>           Fetch a URL (simulated)",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.to_string() == name)
            .ok_or_else(|| CommandError::NotRecognized {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("ls", Command::Ls)]
    #[case("rmdir", Command::Rmdir)]
    #[case("curl", Command::Curl)]
    fn parses_known_names(#[case] name: &str, #[case] expected: Command) {
        assert_eq!(name.parse::<Command>(), Ok(expected));
    }

    #[rstest]
    #[case("LS")]
    #[case("dir")]
    #[case("exit")]
    fn rejects_unknown_names(#[case] name: &str) {
        assert_eq!(
            name.parse::<Command>(),
            Err(CommandError::NotRecognized {
                name: name.to_string()
            })
        );
    }

    #[test]
    fn every_command_round_trips_through_its_name() {
        for command in Command::ALL {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
            assert!(command.usage().starts_with(&command.to_string()));
        }
    }
}
