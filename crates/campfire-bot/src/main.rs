//! Main entry point for Campfire.

use campfire_bot::{BotResult, CampfireBot};
use campfire_common::logging::init_logging;
use campfire_config::{ConfigCache, ConfigLoader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let (config, source) = ConfigLoader::load()?;

    // Dropping the guard stops the file writer, so it lives until exit.
    let _guard = init_logging(&config.logging.to_logging_config())?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?source,
        "Starting Campfire"
    );

    let bot = CampfireBot::new(ConfigCache::with_source(config, source));
    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {e}");
        return Err(e);
    }

    Ok(())
}
