//! Website status check command.
//!
//! Probes a user-supplied URL and reports the outcome as a rich status embed.

use crate::prober::{self, ProbeResult};
use crate::types::{Context, Error};
use poise::serenity_prelude as serenity;
use poise::CreateReply;

/// Embed accent color (Discord dark theme tone).
const EMBED_COLOR: u32 = 0x2b2d31;

/// Thumbnail shown on every status embed.
const THUMBNAIL_URL: &str =
    "https://64.media.tumblr.com/1e95052e26871747ac547c3f40b19d31/tumblr_o4q00xJyfy1u7gnm9o1_500.gif";

/// Check if a website is up or down.
///
/// Takes an optional URL; without one, the configured demonstration URL is
/// probed instead.
#[poise::command(slash_command, prefix_command)]
pub async fn check(
    context: Context<'_>,
    #[description = "Website URL to check"]
    url: Option<String>,
) -> Result<(), Error> {
    let url = url.unwrap_or_else(|| context.data().default_check_url.clone());

    // Defer reply since the probe can take up to 10 seconds
    context.defer().await?;

    let result = prober::probe_website(&context.data().http_client, &url).await;

    let author = context.author();
    let embed = build_status_embed(&result, &author.name, author.avatar_url().as_deref());

    context.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Render a probe result as the site status embed.
fn build_status_embed(
    result: &ProbeResult,
    requester_name: &str,
    requester_avatar: Option<&str>,
) -> serenity::CreateEmbed {
    let domain_display = result
        .url
        .trim_start_matches("https://")
        .trim_start_matches("http://");

    let (status_badge, status_block) = if result.is_up() {
        ("🟢", "```diff\n+ ONLINE\n```")
    } else {
        ("🔴", "```diff\n- OFFLINE\n```")
    };

    let rating = result.speed_rating();

    let mut footer = serenity::CreateEmbedFooter::new(format!(
        "Requested by {} • Powered by VIBE",
        requester_name
    ));
    if let Some(avatar) = requester_avatar {
        footer = footer.icon_url(avatar);
    }

    let mut embed = serenity::CreateEmbed::new()
        .description("## 🔥 ━━━━━━ SITE STATUS ━━━━━━ 🔥")
        .color(EMBED_COLOR)
        .timestamp(serenity::Timestamp::now())
        .thumbnail(THUMBNAIL_URL)
        .field("┃ 🌐 Domain", format!("```{}```", domain_display), false)
        .field(format!("┃ {} Status", status_badge), status_block, true)
        .field(
            "┃ 📊 HTTP Code",
            format!("```{}```", result.http_code_text()),
            true,
        )
        .field(
            format!("┃ {} Response Time", rating.icon()),
            format!(
                "`{:.2}ms`\n`{} {}`",
                result.elapsed_ms(),
                rating.meter(),
                rating.label()
            ),
            false,
        );

    if let Some(error) = result.error_message() {
        embed = embed.field(
            "┃ ⚠️ Error Details",
            format!("```fix\n{}\n```", error),
            false,
        );
    }

    embed.footer(footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prober::ProbeOutcome;

    fn embed_json(result: &ProbeResult) -> String {
        let embed = build_status_embed(result, "tester", None);
        serde_json::to_string(&embed).unwrap()
    }

    #[test]
    fn test_up_embed_contents() {
        let result = ProbeResult {
            url: "https://example.com".to_string(),
            outcome: ProbeOutcome::Up {
                http_code: 200,
                final_url: "https://example.com/".to_string(),
                elapsed_ms: 123.456,
            },
        };
        let json = embed_json(&result);

        assert!(json.contains("+ ONLINE"));
        assert!(json.contains("123.46ms"));
        assert!(json.contains("BLAZING"));
        assert!(json.contains("Requested by tester • Powered by VIBE"));
        // Domain is shown without its scheme
        assert!(json.contains("```example.com```"));
        assert!(!json.contains("Error Details"));
    }

    #[test]
    fn test_down_embed_contents() {
        let result = ProbeResult {
            url: "https://localhost:1".to_string(),
            outcome: ProbeOutcome::Down {
                error: "Connection refused".to_string(),
            },
        };
        let json = embed_json(&result);

        assert!(json.contains("- OFFLINE"));
        assert!(json.contains("N/A"));
        assert!(json.contains("0.00ms"));
        assert!(json.contains("NO RESPONSE"));
        assert!(json.contains("Error Details"));
        assert!(json.contains("Connection refused"));
    }
}
