use std::env;
use std::str::FromStr;

use log::{debug, error, info};

use crate::error::{BotError, Result};
use crate::questions::{DEFAULT_LIMIT, DEFAULT_THRESHOLD, SimilarityConfig};

const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub similarity: SimilarityConfig,
}

impl Config {
    /// Load configuration from the environment, reading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// setting cannot be parsed.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {e}");
            e
        })?;

        let openrouter_api_key = env::var("OPENROUTER_API_KEY").map_err(|e| {
            error!("Failed to load OPENROUTER_API_KEY from environment: {e}");
            e
        })?;

        let openrouter_model = env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| DEFAULT_OPENROUTER_MODEL.to_string());

        let similarity = SimilarityConfig {
            threshold: parse_or(
                "SIMILARITY_THRESHOLD",
                env::var("SIMILARITY_THRESHOLD").ok(),
                DEFAULT_THRESHOLD,
            )?,
            limit: parse_or(
                "SIMILARITY_LIMIT",
                env::var("SIMILARITY_LIMIT").ok(),
                DEFAULT_LIMIT,
            )?,
        };

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!(
            "OpenRouter API key length: {} characters",
            openrouter_api_key.len()
        );
        debug!("OpenRouter model: {openrouter_model}");
        debug!(
            "Similarity threshold: {}, limit: {}",
            similarity.threshold, similarity.limit
        );

        Ok(Self {
            discord_token,
            openrouter_api_key,
            openrouter_model,
            similarity,
        })
    }
}

/// Parse an optional setting, falling back to `default` when unset or blank.
fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            error!("Invalid value for {name}: {raw}");
            BotError::Config(format!("{name} must be a non-negative integer, got '{raw}'"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_value_uses_default() -> Result<()> {
        assert_eq!(parse_or("X", None, 3usize)?, 3);
        assert_eq!(parse_or("X", Some("  ".to_string()), 5usize)?, 5);
        Ok(())
    }

    #[test]
    fn parses_trimmed_value() -> Result<()> {
        assert_eq!(parse_or("X", Some(" 7 ".to_string()), 3usize)?, 7);
        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_or("SIMILARITY_LIMIT", Some("-1".to_string()), 5usize);
        assert!(matches!(err, Err(BotError::Config(msg)) if msg.contains("SIMILARITY_LIMIT")));
    }
}
