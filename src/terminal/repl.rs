use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::config::ShellConfig;
use crate::shell::{CommandOutput, Session};

use super::render::render;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";
const EXIT: &str = "exit";

/// Line-oriented front-end: prints the prompt, feeds lines to the session and
/// shows what comes back.
pub struct Terminal {
    user: String,
    hostname: String,
    color: bool,
}

impl Terminal {
    pub fn new(config: &ShellConfig, color: bool) -> Self {
        colored::control::set_override(color);
        Terminal {
            user: config.user.clone(),
            hostname: config.hostname.clone(),
            color,
        }
    }

    pub fn prompt(&self, session: &Session) -> String {
        format!(
            "{}:{}$ ",
            format!("{}@{}", self.user, self.hostname).green().bold(),
            session.current_path().blue().bold()
        )
    }

    pub fn show(&self, out: &mut impl Write, output: &CommandOutput) -> io::Result<()> {
        if output.is_clear() {
            if self.color {
                write!(out, "{CLEAR_SCREEN}")?;
            }
            return out.flush();
        }
        if output.output.is_empty() {
            return Ok(());
        }

        let text = render(&output.output, self.color);
        if output.error {
            writeln!(out, "{}", text.red())
        } else {
            writeln!(out, "{text}")
        }
    }

    /// Runs `lines` in order without prompting.
    pub fn run_lines(
        &self,
        session: &mut Session,
        lines: &[String],
        out: &mut impl Write,
    ) -> io::Result<()> {
        for line in lines {
            debug!("Running scripted line: {}", line);
            self.show(out, &session.execute(line))?;
        }
        out.flush()
    }

    /// Prompts and executes until end of input or `exit`.
    pub fn run_interactive(
        &self,
        session: &mut Session,
        mut input: impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<()> {
        loop {
            write!(out, "{}", self.prompt(session))?;
            out.flush()?;

            let mut raw = Vec::new();
            if input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(out)?;
                break;
            }
            let decoded = String::from_utf8_lossy(&raw);
            let line = decoded.trim();
            if line == EXIT {
                break;
            }
            self.show(out, &session.execute(line))?;
        }
        out.flush()
    }
}
