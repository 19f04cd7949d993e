use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub config: Option<PathBuf>,
    pub commands: Vec<String>,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            config: cli.config,
            commands: cli.commands,
            color: !cli.no_color,
        }
    }
}
