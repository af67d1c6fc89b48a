//! "What can you do" replies when the bot is mentioned.

use log::info;
use poise::serenity_prelude::{Context, Message as SerenityMessage, UserId};

use crate::error::Result;

const CAPABILITIES: [&str; 3] = [
    "I can roast users when you mention them and include the word 'ROAST'.",
    "I can search for similar questions and provide answers.",
    "I can respond to your messages and help with various tasks.",
];

const CAPABILITY_PROMPTS: [&str; 5] = [
    "what can you do",
    "what are your capabilities",
    "what can you help with",
    "what do you do",
    "help",
];

/// Returns true when `content` asks what the bot can do.
#[must_use]
pub fn asks_for_capabilities(content: &str) -> bool {
    let content = content.to_lowercase();
    CAPABILITY_PROMPTS
        .iter()
        .any(|prompt| content.contains(prompt))
}

/// The capability list reply.
#[must_use]
pub fn capabilities_reply() -> String {
    format!(
        "Here are some things I can do:\n- {}",
        CAPABILITIES.join("\n- ")
    )
}

/// Reply with the capability list. Returns `true` if a reply was sent.
pub async fn handle_capabilities(
    ctx: &Context,
    new_message: &SerenityMessage,
    bot_user_id: UserId,
) -> Result<bool> {
    if !new_message.mentions_user_id(bot_user_id) || !asks_for_capabilities(&new_message.content)
    {
        return Ok(false);
    }

    new_message.reply(&ctx.http, capabilities_reply()).await?;
    info!(
        "Sent capabilities to {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_prompts_case_insensitively() {
        assert!(asks_for_capabilities("<@123> What CAN you do?"));
        assert!(asks_for_capabilities("<@123> I need HELP"));
        assert!(!asks_for_capabilities("<@123> good morning"));
    }

    #[test]
    fn reply_lists_every_capability() {
        let reply = capabilities_reply();
        let lines: Vec<&str> = reply.lines().collect();

        assert_eq!(lines[0], "Here are some things I can do:");
        assert_eq!(lines.len(), CAPABILITIES.len() + 1);
        assert!(lines[1..].iter().all(|line| line.starts_with("- ")));
    }
}
