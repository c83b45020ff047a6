//! Ping command for bot health check.

use crate::types::{Context, Error};

/// Simple ping command to check if the bot is responsive.
#[poise::command(slash_command, prefix_command)]
pub async fn ping(context: Context<'_>) -> Result<(), Error> {
    let latency = context.ping().await;
    context
        .say(format!("Pong! 🏓 Gateway latency: {}ms", latency.as_millis()))
        .await?;
    Ok(())
}
