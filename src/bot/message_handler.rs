//! Message Handler module for processing incoming text messages

use anyhow::Result;
use teloxide::types::ChatId;
use tracing::info;

// Import localization
use crate::localization::t;

// Import state store
use crate::store::StateStore;

// Import dialogue manager functions
use super::dialogue_manager::{handle_free_text, start_new_calculation};
use super::sender::{Reply, ReplySender};

/// Commands the bot reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `/new` or `/start`: drop collected values and show the menu
    Reset,
    /// `/help`: usage text
    Help,
}

impl Command {
    /// Recognize a command at the very start of a message, ignoring arguments.
    ///
    /// A `/cmd@name` form is only ours when `name` matches `bot_username`;
    /// without a known username the suffix cannot be checked and is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let token = text.strip_prefix('/')?.split(char::is_whitespace).next()?;
        let (name, addressee) = match token.split_once('@') {
            Some((name, addressee)) => (name, Some(addressee)),
            None => (token, None),
        };

        if let (Some(addressee), Some(own)) = (addressee, bot_username) {
            if !addressee.eq_ignore_ascii_case(own.trim_start_matches('@')) {
                return None;
            }
        }

        match name.to_lowercase().as_str() {
            "new" | "start" => Some(Command::Reset),
            "help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Handle a text message
pub async fn message_handler(
    sender: &dyn ReplySender,
    store: &StateStore,
    bot_username: Option<&str>,
    chat_id: ChatId,
    text: &str,
) -> Result<()> {
    info!(chat_id = %chat_id, "Received text message");

    match Command::parse(text, bot_username) {
        Some(Command::Reset) => start_new_calculation(sender, store, chat_id).await,
        Some(Command::Help) => {
            sender
                .send_reply(Reply::text(chat_id, t("help-text")))
                .await?;
            Ok(())
        }
        None => handle_free_text(sender, store, chat_id, text).await,
    }
}
