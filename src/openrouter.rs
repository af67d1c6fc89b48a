use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};
use crate::types::MessageRole;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

// Discord's message limit is 2000 characters (standard users)
// Roughly 1 token ≈ 4 characters, so 2000 chars ≈ 500 tokens
// Using 512 tokens to be safe
const MAX_TOKENS: u32 = 512;

#[derive(Debug, Serialize)]
struct OpenRouterRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
}

impl Message {
    fn new(role: MessageRole, content: &str) -> Self {
        Self {
            role,
            content: Some(content.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

pub struct OpenRouterClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
        }
    }

    /// Send a single system + user exchange and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the response carries no choices.
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let request = OpenRouterRequest {
            model: &self.model,
            messages: vec![
                Message::new(MessageRole::System, system_prompt),
                Message::new(MessageRole::User, user_message),
            ],
            max_tokens: MAX_TOKENS,
        };

        debug!("Sending completion request to OpenRouter ({})", self.model);

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::OpenRouterApi { status, message });
        }

        let api_response: OpenRouterResponse = response.json().await?;
        let reply = extract_reply(api_response)?;

        debug!("Received response from OpenRouter API");
        Ok(reply)
    }
}

fn extract_reply(response: OpenRouterResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| BotError::OpenRouterResponse("No choices in response".to_string()))?;

    Ok(choice.message.content.unwrap_or_default())
}
