use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use supports_color::Stream;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::config::ShellConfig;
use crate::config::ShellConfigError;
use crate::filesystem::SeedError;
use crate::shell::Session;
use crate::terminal::Terminal;

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let config = match &runtime_config.config {
            Some(path) => ShellConfig::read(path).await.context(ConfigSnafu)?,
            None => {
                debug!("No config file given, using defaults");
                ShellConfig::default()
            }
        };
        debug!("Loaded config: {:?}", config);

        let state = config.seed().build().context(SeedTreeSnafu)?;
        info!("Starting session in {}", state.display_path());
        let mut session = Session::new(state);

        let color = runtime_config.color && supports_color::on(Stream::Stdout).is_some();
        let terminal = Terminal::new(&config, color);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let result = if runtime_config.commands.is_empty() {
            terminal.run_interactive(&mut session, io::stdin().lock(), &mut out)
        } else {
            terminal.run_lines(&mut session, &runtime_config.commands, &mut out)
        };
        result.context(TerminalSnafu)?;

        info!(
            "Session ended at filesystem version {}, last changed {}",
            session.state().version(),
            session.state().modified_at()
        );
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the configuration"))]
    ConfigError { source: ShellConfigError },
    #[snafu(display("Critical failure encountered while building the initial tree"))]
    SeedTreeError { source: SeedError },
    #[snafu(display("Critical failure encountered while talking to the terminal"))]
    TerminalError { source: io::Error },
}
