//! CLI Application

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use employee_utils::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let cli = Cli::parse();
    log::debug!("{} starting: {:?}", config.app_name, cli.command);

    match cli.command {
        Commands::Show(args) => commands::employee::show(&config, args)?,
        Commands::Raise(args) => commands::employee::raise(args)?,
        Commands::Demo => commands::demo::handle()?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}
