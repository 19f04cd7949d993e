use tracing::debug;

use crate::filesystem::FileSystem;

use super::interpreter;
use super::output::CommandOutput;

/// Owns the live filesystem of one shell session.
///
/// This is the surface a front-end talks to: run a line, read the path for the
/// prompt. Each command installs the state the interpreter hands back.
#[derive(Debug, Clone)]
pub struct Session {
    state: FileSystem,
}

impl Session {
    pub fn new(state: FileSystem) -> Self {
        Session { state }
    }

    pub fn execute(&mut self, line: &str) -> CommandOutput {
        let transition = interpreter::execute(&self.state, line);
        if transition.state.version() != self.state.version() {
            debug!("Installing filesystem version {}", transition.state.version());
        }
        self.state = transition.state;
        transition.output
    }

    /// Absolute path of the working directory, for the prompt.
    pub fn current_path(&self) -> String {
        self.state.display_path()
    }

    /// The current snapshot. It stays valid and unchanged whatever runs next.
    pub fn state(&self) -> &FileSystem {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::Seed;

    fn session() -> Session {
        Session::new(Seed::default().build().expect("default seed should build"))
    }

    #[test]
    fn tracks_the_working_directory() {
        let mut session = session();
        assert_eq!(session.current_path(), "/home/user");

        assert_eq!(session.execute("cd /tmp"), CommandOutput::success(""));
        assert_eq!(session.current_path(), "/tmp");

        assert!(session.execute("cd /nope").error);
        assert_eq!(session.current_path(), "/tmp");
    }

    #[test]
    fn earlier_snapshots_survive_later_commands() {
        let mut session = session();
        let snapshot = session.state().clone();

        session.execute("rm welcome.txt");
        session.execute("mkdir notes");

        assert!(snapshot.current_directory().child("welcome.txt").is_some());
        assert!(snapshot.current_directory().child("notes").is_none());
        assert!(session.state().current_directory().child("welcome.txt").is_none());
        assert_eq!(session.state().version(), snapshot.version() + 2);
    }

    #[test]
    fn failed_commands_keep_the_version() {
        let mut session = session();
        let version = session.state().version();
        session.execute("rmdir welcome.txt");
        session.execute("nonsense");
        assert_eq!(session.state().version(), version);
    }
}
