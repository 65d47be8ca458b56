//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::types::{CallbackQueryId, ChatId};
use tracing::{debug, warn};

// Import localization
use crate::localization::t;

// Import dialogue types
use crate::dialogue::Field;

// Import state store
use crate::store::StateStore;

use super::dialogue_manager::expect_field;
use super::sender::{Reply, ReplySender};

/// Handle callback queries from the value menu
pub async fn callback_handler(
    sender: &dyn ReplySender,
    store: &StateStore,
    id: CallbackQueryId,
    chat_id: Option<ChatId>,
    data: Option<&str>,
) -> Result<()> {
    debug!(callback_id = ?id, chat_id = ?chat_id, data = ?data, "Received callback query");

    // Answer first to remove the loading state; failure only costs the spinner
    if let Err(e) = sender.answer_callback_query(id.clone()).await {
        warn!(callback_id = ?id, error = %e, "Failed to answer callback query");
    }

    let Some(chat_id) = chat_id else {
        warn!(callback_id = ?id, data = ?data, "Callback query without a chat, ignoring");
        return Ok(());
    };

    match data.and_then(Field::from_action_id) {
        Some(field) => expect_field(sender, store, chat_id, field).await,
        None => {
            debug!(chat_id = %chat_id, data = ?data, "Unrecognized callback data");
            sender
                .send_reply(Reply::text(chat_id, t("callback-unknown")))
                .await?;
            Ok(())
        }
    }
}
