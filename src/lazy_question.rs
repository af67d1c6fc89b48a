//! Mock "has anyone ..." questions with a search link.

use log::info;
use poise::serenity_prelude::{Context, Message as SerenityMessage};
use url::Url;

use crate::error::Result;

const LAZY_TRIGGER: &str = "has anyone";
const SEARCH_URL: &str = "https://www.google.com/search";

/// Build the mocking reply for a lazy question, if `content` is one.
///
/// # Errors
///
/// Returns an error if the search URL cannot be built.
pub fn lazy_question_reply(content: &str) -> Result<Option<String>> {
    if !content.trim().contains(LAZY_TRIGGER) {
        return Ok(None);
    }

    let query = content
        .split_once(LAZY_TRIGGER)
        .map_or("", |(_, rest)| rest)
        .trim();

    let url = Url::parse_with_params(SEARCH_URL, &[("q", query)])?;

    Ok(Some(format!("Have you ever tried to google it? 🙄 {url}")))
}

/// Reply to lazy questions. Returns `true` if a reply was sent.
pub async fn handle_lazy_question(ctx: &Context, new_message: &SerenityMessage) -> Result<bool> {
    let Some(reply) = lazy_question_reply(&new_message.content)? else {
        return Ok(false);
    };

    new_message.reply(&ctx.http, &reply).await?;
    info!(
        "Mocked lazy question from {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    Ok(true)
}
