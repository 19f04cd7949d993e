use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// A Unix-like shell over an in-memory filesystem.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML file with the user name, hostname and extra seed files
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Run this command line and exit instead of prompting; may be repeated
    #[clap(long = "command", short = 'c')]
    pub commands: Vec<String>,

    /// Never colour the output
    #[clap(long)]
    pub no_color: bool,
}
