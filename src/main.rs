#[tokio::main]
async fn main() -> snarkbot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("snarkbot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting snarkbot Discord bot");

    match snarkbot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
