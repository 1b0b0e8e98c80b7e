mod cli;
mod commands;
mod config;
mod logging;
mod output;

use clap::Parser;
use color_eyre::eyre::Result;

use cli::Cli;
use config::UserConfig;
use logging::LogMode;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = UserConfig::load();

    let mode = if config.log_to_file {
        LogMode::Both
    } else {
        LogMode::Stderr
    };
    let _guard = logging::init(config.log_level, mode, cli.log_level);
    tracing::debug!(config = %config::config_path().display(), "loaded config");

    let output = cli.output.unwrap_or(config.output);
    commands::run(cli.command, &config, output)
}
