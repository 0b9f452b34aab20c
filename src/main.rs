use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use studentdesk::config::Config;
use studentdesk::logger::Logger;
use studentdesk::ui;

#[derive(Parser, Debug)]
#[command(
    name = "studentdesk",
    version,
    about = "A terminal dashboard for student tasks, notifications and settings"
)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit (defaults to the user config dir)
    #[arg(long, value_name = "PATH")]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;
    log::info!("studentdesk starting (theme: {})", config.appearance.theme);

    ui::run_app(config, logger).await
}
