use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meter_bot::bot::UpdateDispatcher;
use meter_bot::config::{Config, LogFormat};
use meter_bot::server::{router, AppState};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Own username from config, or from `getMe` when not configured
async fn resolve_bot_username(bot: &Bot, configured: Option<String>) -> Option<String> {
    if configured.is_some() {
        return configured;
    }
    match bot.get_me().await {
        Ok(me) => me.user.username,
        Err(e) => {
            warn!(error = %e, "Could not fetch bot username, /cmd@name suffixes are not checked");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    info!("Starting Meter Telegram Bot");

    let dispatcher = match &config.bot_token {
        Some(token) => {
            let bot = Bot::new(token);
            let username = resolve_bot_username(&bot, config.bot_username.clone()).await;
            info!(username = ?username, "Bot client ready");
            Some(Arc::new(
                UpdateDispatcher::new(Arc::new(bot)).with_bot_username(username),
            ))
        }
        None => {
            warn!("TELEGRAM_BOT_TOKEN is not set, every update will be answered with 500");
            None
        }
    };

    let app = router(&config.webhook_path, AppState::new(dispatcher));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, path = %config.webhook_path, "Listening for webhook updates");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
