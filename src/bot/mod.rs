mod results;
pub mod telegram;

use crate::{config::Config, media::MediaResolver};
use anyhow::{Context, Result};
use std::sync::Arc;

pub async fn run(token: String, config: &Config) -> Result<()> {
    let resolver =
        MediaResolver::new(&config.search).context("Failed to initialize media resolver")?;

    let bot = telegram::TelegramBot::new(token, Arc::new(resolver));
    bot.run().await
}
