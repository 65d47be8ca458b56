//! # Error Types Module
//!
//! Errors that abort processing of an update. Anything in here ends up as a
//! 500 on the webhook so Telegram redelivers the update.

use thiserror::Error;

/// Errors raised while handling a webhook request
#[derive(Debug, Error)]
pub enum BotError {
    /// No bot token configured, replies are impossible
    #[error("TELEGRAM_BOT_TOKEN is not set")]
    MissingToken,
    /// Request body is not a Telegram update
    #[error("Invalid update payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// Telegram Bot API call failed
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_formatting() {
        let err = BotError::Config("BIND_ADDR is not a socket address".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: BIND_ADDR is not a socket address"
        );

        let err = BotError::MissingToken;
        assert_eq!(err.to_string(), "TELEGRAM_BOT_TOKEN is not set");
    }

    #[test]
    fn test_payload_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BotError = parse_err.into();
        assert!(matches!(err, BotError::Payload(_)));
        assert!(err.to_string().starts_with("Invalid update payload"));
    }
}
