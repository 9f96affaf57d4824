use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hbnb_console::{Config, Console, FileStorage, CLI};
use tracing::debug;

fn main() -> Result<()> {
    let config = Config::parse();
    hbnb_console::logging::init().map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
    debug!(?config, "starting console");

    let storage = FileStorage::open(&config.file)
        .with_context(|| format!("failed to load objects from {}", config.file.display()))?;

    let mut cli = CLI::new(Console::new(storage));
    cli.run()?;
    cli.shutdown()
}
