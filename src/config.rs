//! # Configuration Module
//!
//! Runtime settings read from the process environment (optionally seeded
//! from a `.env` file by the binary).

use std::env;
use std::net::SocketAddr;

use crate::errors::BotError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_WEBHOOK_PATH: &str = "/api/bot";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token; `None` leaves the webhook answering 500
    pub bot_token: Option<String>,
    /// Bot username without `@`; asked from Telegram at startup when unset
    pub bot_username: Option<String>,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Route Telegram posts updates to
    pub webhook_path: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let bot_username = lookup("TELEGRAM_BOT_USERNAME")
            .map(|name| name.trim().trim_start_matches('@').to_string())
            .filter(|name| !name.is_empty());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| {
            BotError::Config(format!("BIND_ADDR is not a socket address: {bind_raw}"))
        })?;

        let webhook_path =
            lookup("WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        if !webhook_path.starts_with('/') {
            return Err(BotError::Config(format!(
                "WEBHOOK_PATH must start with '/': {webhook_path}"
            )));
        }

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(BotError::Config(format!(
                    "LOG_FORMAT must be 'text' or 'json': {other}"
                )))
            }
        };

        Ok(Self {
            bot_token,
            bot_username,
            bind_addr,
            webhook_path,
            log_format,
        })
    }
}
