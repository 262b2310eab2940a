use anyhow::{Context, Result};
use clap::Parser;

use file_browser::cli::{Cli, Command};
use file_browser::commands;
use file_browser::config::Config;
use file_browser::logging::{self, OutputMode};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = match cli.command {
        Command::View(_) => OutputMode::Interactive,
        Command::Print(_) | Command::Completions(_) => OutputMode::Plain,
    };
    logging::init(cli.verbose, cli.quiet, mode);

    let config = Config::load(cli.config.as_deref()).context("could not load configuration")?;
    tracing::debug!(?config, ?mode, "Configuration ready");

    match cli.command {
        Command::View(args) => commands::view::run(args, &config)?,
        Command::Print(args) => commands::print::run(args, &config)?,
        Command::Completions(args) => commands::completions::run(args),
    }

    Ok(())
}
