//! Discord bot core logic and event handling.

use std::error::Error as StdError;

use log::{debug, error, info};
use poise::{
    Framework, FrameworkOptions,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};
use tokio::sync::Mutex;

use crate::capabilities::handle_capabilities;
use crate::config::Config;
use crate::error::Result;
use crate::lazy_question::handle_lazy_question;
use crate::openrouter::OpenRouterClient;
use crate::questions::{QuestionStore, SimilarityConfig, handle_help_question};
use crate::roast::handle_roast;

type EventResult = std::result::Result<(), Box<dyn StdError + Send + Sync>>;

/// State shared by all event handlers.
pub struct Data {
    openrouter_client: OpenRouterClient,
    questions: Mutex<QuestionStore>,
    similarity: SimilarityConfig,
}

impl Data {
    #[must_use]
    pub fn new(openrouter_client: OpenRouterClient, similarity: SimilarityConfig) -> Self {
        Self {
            openrouter_client,
            questions: Mutex::new(QuestionStore::default()),
            similarity,
        }
    }

    pub fn openrouter_client(&self) -> &OpenRouterClient {
        &self.openrouter_client
    }

    /// Questions asked since startup. Never hold the lock across a Discord call.
    pub fn questions(&self) -> &Mutex<QuestionStore> {
        &self.questions
    }

    pub fn similarity(&self) -> &SimilarityConfig {
        &self.similarity
    }
}

/// Run the Discord bot.
///
/// # Errors
///
/// Returns an error if configuration is missing or the Discord client fails.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing OpenRouter client");
    let openrouter_client = OpenRouterClient::new(
        config.openrouter_api_key.clone(),
        config.openrouter_model.clone(),
    );
    let data = Data::new(openrouter_client, config.similarity);

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                Ok(data)
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> EventResult {
    let FullEvent::Message { new_message } = event else {
        return Ok(());
    };

    if new_message.author.bot {
        return Ok(());
    }

    let bot_user_id = ctx.cache.current_user().id;

    if let Err(e) = handle_lazy_question(ctx, new_message).await {
        error!("Lazy question handler failed: {e}");
    }

    if let Err(e) = handle_capabilities(ctx, new_message, bot_user_id).await {
        error!("Capabilities handler failed: {e}");
    }

    if let Err(e) = handle_roast(ctx, new_message, data, bot_user_id).await {
        error!("Error roasting for {}: {e}", new_message.author.tag());
        if let Err(send_err) = new_message.reply(&ctx.http, e.user_message()).await {
            error!("Failed to send roast error reply: {send_err}");
        }
    }

    if let Err(e) = handle_help_question(ctx, new_message, data).await {
        error!(
            "Error answering help question from {}: {e}",
            new_message.author.tag()
        );
    }

    Ok(())
}
