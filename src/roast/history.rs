//! Recent message collection across a guild's text channels.

use log::{debug, warn};
use poise::serenity_prelude::{ChannelType, Context, GetMessages, GuildChannel, GuildId, UserId};

use crate::error::Result;

/// Maximum messages kept per user.
pub const MAX_RECENT_MESSAGES: usize = 20;

/// Messages fetched per channel (Discord API maximum).
const CHANNEL_FETCH_LIMIT: u8 = 100;

/// Collect up to [`MAX_RECENT_MESSAGES`] recent messages written by `user_id`.
///
/// Text channels are scanned in display order and scanning stops once
/// enough messages are collected. Channels that cannot be read are skipped.
pub async fn fetch_recent_messages(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<Vec<String>> {
    let mut channels: Vec<GuildChannel> = guild_id
        .channels(&ctx.http)
        .await?
        .into_values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .collect();
    channels.sort_by_key(|channel| channel.position);

    let mut recent = Vec::new();
    for channel in channels {
        let messages = match channel
            .id
            .messages(&ctx.http, GetMessages::new().limit(CHANNEL_FETCH_LIMIT))
            .await
        {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Failed to fetch messages from channel {}: {e}", channel.name);
                continue;
            }
        };

        recent.extend(
            messages
                .into_iter()
                .filter(|msg| msg.author.id == user_id)
                .map(|msg| msg.content),
        );

        if recent.len() >= MAX_RECENT_MESSAGES {
            break;
        }
    }

    recent.truncate(MAX_RECENT_MESSAGES);
    debug!("Collected {} recent messages for {user_id}", recent.len());

    Ok(recent)
}
