//! Handler for messages asking for a roast.

use futures::future::join_all;
use log::{debug, error, info, warn};
use poise::serenity_prelude::{Context, Message as SerenityMessage, User, UserId};

use crate::bot::Data;
use crate::error::Result;

use super::history::fetch_recent_messages;
use super::prompt::{Roastee, build_roast_prompt};

const ROAST_TRIGGER: &str = "ROAST";

/// Reply sent when the chat model cannot produce a roast.
pub const ROAST_FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response at the moment.";

/// Returns true when `content` asks for a roast, in any letter case.
#[must_use]
pub fn is_roast_request(content: &str) -> bool {
    content.to_uppercase().contains(ROAST_TRIGGER)
}

fn roast_targets(mentions: &[User], bot_user_id: UserId) -> Vec<&User> {
    mentions
        .iter()
        .filter(|user| !user.bot && user.id != bot_user_id)
        .collect()
}

/// Roast the users mentioned in `new_message`.
///
/// Returns `true` if a reply was sent.
pub async fn handle_roast(
    ctx: &Context,
    new_message: &SerenityMessage,
    data: &Data,
    bot_user_id: UserId,
) -> Result<bool> {
    if !is_roast_request(&new_message.content) {
        return Ok(false);
    }

    let Some(guild_id) = new_message.guild_id else {
        debug!("Roast requested outside a server, ignoring");
        return Ok(false);
    };

    let targets = roast_targets(&new_message.mentions, bot_user_id);
    if targets.is_empty() {
        debug!("Roast requested without anyone to roast");
        return Ok(false);
    }

    info!(
        "Roasting {} users for {} in channel {}",
        targets.len(),
        new_message.author.tag(),
        new_message.channel_id
    );

    if let Err(e) = new_message.channel_id.broadcast_typing(&ctx.http).await {
        debug!("Failed to broadcast typing indicator: {e}");
    }

    let roastees: Vec<Roastee> = join_all(targets.into_iter().map(|user| async move {
        let recent_messages = fetch_recent_messages(ctx, guild_id, user.id)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to collect recent messages for {}: {e}", user.tag());
                Vec::new()
            });
        Roastee {
            id: user.id,
            username: user.name.clone(),
            recent_messages,
        }
    }))
    .await;

    let prompt = build_roast_prompt(&roastees);
    let roast = match data
        .openrouter_client()
        .complete(&prompt, &new_message.content)
        .await
    {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Chat model returned an empty roast");
            ROAST_FALLBACK_REPLY.to_string()
        }
        Err(e) => {
            error!("Error getting roast from chat model: {e}");
            ROAST_FALLBACK_REPLY.to_string()
        }
    };

    new_message.reply(&ctx.http, &roast).await?;
    info!(
        "Replied to {} in channel {}: {}",
        new_message.author.tag(),
        new_message.channel_id,
        roast
    );

    Ok(true)
}
