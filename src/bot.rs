use crate::commands::{check, ping};
use crate::config::Config;
use crate::prober;
use crate::types::Data;
use poise::serenity_prelude as serenity;

pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    // Prefix commands require the privileged message content intent
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    // One shared client; the probe timeout doubles as the client-wide bound
    let http_client = reqwest::Client::builder()
        .timeout(prober::REQUEST_TIMEOUT)
        .build()?;

    let default_check_url = config.default_check_url.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![ping(), check()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |context, ready, framework| {
            Box::pin(async move {
                println!("Bot is online as {}", ready.user.name);
                println!("Ready to check websites!");
                poise::builtins::register_globally(context, &framework.options().commands).await?;
                Ok(Data {
                    http_client,
                    default_check_url,
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .activity(serenity::ActivityData::watching("website status | /check"))
        .await?;

    client.start().await?;

    Ok(())
}
