//! `!help` handler: report similar past questions, then record this one.

use log::{debug, info};
use poise::serenity_prelude::{Context, Message as SerenityMessage};

use crate::bot::Data;
use crate::error::Result;

use super::format::format_lookup_reply;
use super::matcher::{SimilarityConfig, find_similar_questions};
use super::store::QuestionStore;

/// Case-sensitive marker that turns a message into a tracked question.
pub const HELP_TRIGGER: &str = "!help";

/// Returns the question text if `content` carries the help marker.
#[must_use]
pub fn help_question(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    trimmed.contains(HELP_TRIGGER).then_some(trimmed)
}

/// Build the reply for `question`, then record it in `store`.
///
/// The lookup runs before the question is recorded, so a question only
/// matches itself if it was asked in an earlier message.
pub fn answer_and_record(
    store: &mut QuestionStore,
    question: &str,
    config: &SimilarityConfig,
) -> String {
    let matches = find_similar_questions(store, question, config);
    debug!(
        "Help lookup: {} similar of {} stored",
        matches.len(),
        store.len()
    );
    let reply = format_lookup_reply(&matches);
    store.add_question(question);
    reply
}

/// Answer a help request with similar earlier questions.
///
/// The question is recorded before the reply is sent, so it stays tracked
/// even when Discord rejects the reply.
///
/// Returns `true` if the message was a help request.
pub async fn handle_help_question(
    ctx: &Context,
    new_message: &SerenityMessage,
    data: &Data,
) -> Result<bool> {
    let Some(question) = help_question(&new_message.content) else {
        return Ok(false);
    };

    let reply = {
        let mut store = data.questions().lock().await;
        answer_and_record(&mut store, question, data.similarity())
    };

    new_message.reply(&ctx.http, &reply).await?;
    info!(
        "Answered help question from {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::NOT_FOUND_REPLY;

    #[test]
    fn detects_trigger_and_trims() {
        assert_eq!(
            help_question("  !help how do I exit vim?  "),
            Some("!help how do I exit vim?")
        );
        assert_eq!(help_question("what is this !help"), Some("what is this !help"));
    }

    #[test]
    fn trigger_is_case_sensitive() {
        assert_eq!(help_question("!HELP me"), None);
        assert_eq!(help_question("help me"), None);
    }

    #[test]
    fn first_ask_is_new_then_recorded() {
        let mut store = QuestionStore::default();
        let config = SimilarityConfig::default();

        let reply = answer_and_record(&mut store, "!help what is a closure", &config);

        assert_eq!(reply, NOT_FOUND_REPLY);
        assert_eq!(store.question_count("!help what is a closure"), 1);
    }

    #[test]
    fn second_ask_lists_the_earlier_question() {
        let mut store = QuestionStore::default();
        let config = SimilarityConfig::default();

        let _ = answer_and_record(&mut store, "!help what is a closure", &config);
        let reply = answer_and_record(&mut store, "!help What is a closure?", &config);

        let key = store.normalizer().normalize("!help what is a closure");
        assert_eq!(
            reply,
            format!("I found 1 occurrence of similar questions:\n- \"{key}\" (1 time)")
        );
        assert_eq!(store.question_count("!help what is a closure"), 2);
    }
}
