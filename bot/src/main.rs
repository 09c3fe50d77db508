use std::sync::Arc;

use anyhow::Context as _;
use kv_bot::context::AppContext;
use kv_bot::handlers::Handler;
use kv_bot::logging::init_logging;
use kv_shared::AppConfig;
use serenity::all::GatewayIntents;
use serenity::http::Http;
use serenity::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(
        environment = ?config.environment,
        root_domain = %config.verification.allowed_root_domain,
        "Starting Kosen verify bot"
    );

    let http = Arc::new(Http::new(&config.discord.bot_token));
    let app = Arc::new(
        AppContext::build(&config, http)
            .await
            .context("failed to initialize services")?,
    );

    let mut client = Client::builder(&config.discord.bot_token, GatewayIntents::GUILDS)
        .event_handler(Handler::new(app))
        .await
        .context("failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                shard_manager.shutdown_all().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    client.start().await.context("Discord client stopped")?;

    tracing::info!("Bot shutdown complete");
    Ok(())
}
