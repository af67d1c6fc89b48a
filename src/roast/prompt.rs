//! Roast prompt construction.

use poise::serenity_prelude::UserId;

/// A user to roast, with the messages the roast is based on.
#[derive(Debug, Clone)]
pub struct Roastee {
    pub id: UserId,
    pub username: String,
    pub recent_messages: Vec<String>,
}

fn roastee_block(roastee: &Roastee) -> String {
    format!(
        "User: {} (ID: {})\nRecent messages:\n{}",
        roastee.username,
        roastee.id,
        roastee.recent_messages.join("\n")
    )
}

/// Build the system prompt for roasting `roastees`.
#[must_use]
pub fn build_roast_prompt(roastees: &[Roastee]) -> String {
    let context = roastees
        .iter()
        .map(roastee_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are a roast master. Do not hold back and provide the entire message. \
         Assume they are smart and shouldn't be asking stupid or simple questions. \
         This is a programmer class, so make the roasts actually funny and not corny. \
         Roast the following users based on their recent messages:\n\n{context}\n\n\
         When you want to tag a user, use <@id> where id is the id of the user provided. \
         Do not ramble on and on, just provide the roast and nothing else. \
         Make it short and concise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roastee(id: u64, name: &str, messages: &[&str]) -> Roastee {
        Roastee {
            id: UserId::new(id),
            username: name.to_string(),
            recent_messages: messages.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn includes_each_user_block() {
        let prompt = build_roast_prompt(&[
            roastee(11, "ferris", &["is unsafe really that bad", "!help lifetimes"]),
            roastee(22, "gopher", &[]),
        ]);

        assert!(prompt.contains(
            "User: ferris (ID: 11)\nRecent messages:\nis unsafe really that bad\n!help lifetimes"
        ));
        assert!(prompt.contains("!help lifetimes\n\nUser: gopher (ID: 22)\nRecent messages:\n"));
    }

    #[test]
    fn explains_mention_format() {
        let prompt = build_roast_prompt(&[roastee(1, "a", &["hi"])]);
        assert!(prompt.starts_with("You are a roast master."));
        assert!(prompt.contains("use <@id> where id is the id"));
        assert!(prompt.ends_with("Make it short and concise."));
    }
}
