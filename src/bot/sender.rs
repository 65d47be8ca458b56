//! Outbound capability: everything the bot says goes through [`ReplySender`]

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup};

use crate::errors::BotError;

/// One message to deliver to a chat
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub chat_id: ChatId,
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Reply {
    pub fn text(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(
        chat_id: ChatId,
        text: impl Into<String>,
        keyboard: InlineKeyboardMarkup,
    ) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Sends messages and acknowledges callback queries
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError>;

    async fn answer_callback_query(&self, callback_id: CallbackQueryId) -> Result<(), BotError>;

    /// Deliver a prepared reply
    async fn send_reply(&self, reply: Reply) -> Result<(), BotError> {
        self.send_message(reply.chat_id, reply.text, reply.keyboard)
            .await
    }
}

#[async_trait]
impl ReplySender for Bot {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError> {
        let request = Requester::send_message(self, chat_id, text);
        match keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: CallbackQueryId) -> Result<(), BotError> {
        Requester::answer_callback_query(self, callback_id).await?;
        Ok(())
    }
}
