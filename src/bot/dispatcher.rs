//! Update dispatcher: routes one incoming update to the matching handler

use anyhow::Result;
use std::sync::Arc;
use teloxide::types::{ChatId, Update};
use tracing::{debug, info};

use crate::dialogue::ChatState;
use crate::store::StateStore;

use super::callback_handler::callback_handler;
use super::message_handler::message_handler;
use super::sender::ReplySender;
use super::update::Incoming;

/// Owns the chat state store and performs one conversation step per update
pub struct UpdateDispatcher {
    store: StateStore,
    sender: Arc<dyn ReplySender>,
    /// Own username, used to tell `/cmd@name` commands apart in groups
    bot_username: Option<String>,
}

impl UpdateDispatcher {
    pub fn new(sender: Arc<dyn ReplySender>) -> Self {
        Self {
            store: StateStore::new(),
            sender,
            bot_username: None,
        }
    }

    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    /// Handle a raw Telegram update
    pub async fn handle_update(&self, update: Update) -> Result<()> {
        debug!(update_id = ?update.id, "Dispatching update");
        self.dispatch(Incoming::from(update)).await
    }

    /// Handle an already classified update
    pub async fn dispatch(&self, incoming: Incoming) -> Result<()> {
        let sender = self.sender.as_ref();

        match incoming {
            Incoming::Text { chat_id, text } => {
                let username = self.bot_username.as_deref();
                message_handler(sender, &self.store, username, chat_id, &text).await
            }
            Incoming::Callback { id, chat_id, data } => {
                callback_handler(sender, &self.store, id, chat_id, data.as_deref()).await
            }
            Incoming::Unhandled { kind } => {
                info!(kind, "Unhandled update kind");
                Ok(())
            }
        }
    }

    /// Snapshot of a chat's conversation record
    pub async fn chat_state(&self, chat_id: ChatId) -> Option<ChatState> {
        self.store.get(chat_id).await
    }
}
