use anyhow::Result;
use clap::Parser;

mod args;
mod config;
mod demo;
mod env;
use args::{Cli, Command};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level(cli.debug, cli.quiet).filter())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Demo { format, params } => {
            // Defaults from the config file go first so the command line wins
            let argv = config.argv(params);
            tracing::debug!("Demo arguments: {:?}", argv);
            demo::run(&argv, format.unwrap_or(config.format))
        }
        Command::Env { text, number } => {
            env::run(&text, &number);
            Ok(())
        }
    }
}
