//! Shared test doubles

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup};

use meter_bot::bot::{Reply, ReplySender};
use meter_bot::errors::BotError;

/// Records outbound traffic instead of talking to Telegram
#[derive(Default)]
pub struct RecordingSender {
    replies: Mutex<Vec<Reply>>,
    answered: Mutex<Vec<CallbackQueryId>>,
    pub fail_answers: AtomicBool,
    pub fail_sends: AtomicBool,
}

#[allow(dead_code)]
impl RecordingSender {
    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.replies.lock().unwrap().last().map(|r| r.text.clone())
    }

    pub fn answered(&self) -> Vec<CallbackQueryId> {
        self.answered.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.replies.lock().unwrap().clear();
    }

    pub fn set_fail_answers(&self, fail: bool) {
        self.fail_answers.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReplySender for RecordingSender {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(BotError::Config("simulated send failure".to_string()));
        }
        self.replies.lock().unwrap().push(Reply {
            chat_id,
            text,
            keyboard,
        });
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: CallbackQueryId) -> Result<(), BotError> {
        if self.fail_answers.load(Ordering::SeqCst) {
            return Err(BotError::Config("simulated answer failure".to_string()));
        }
        self.answered.lock().unwrap().push(callback_id);
        Ok(())
    }
}
