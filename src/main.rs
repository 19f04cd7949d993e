#![allow(clippy::enum_variant_names, clippy::module_inception)]

use clap::Parser as _;
use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::{
    application::{Application, ApplicationError},
    cli::Cli,
};

mod application;
mod cli;
mod config;
mod ext;
mod filesystem;
mod shell;
mod terminal;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args).await?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    let level = cli_args.log_level.to_level_filter();
    if level != LevelFilter::OFF {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
