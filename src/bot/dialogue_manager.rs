//! Dialogue Manager module for handling dialogue state transitions

use anyhow::Result;
use teloxide::types::ChatId;
use tracing::{debug, info};

// Import localization
use crate::localization::{t, t_args};

// Import dialogue types
use crate::dialogue::{parse_reading, ChatState, Field, Step};

// Import state store
use crate::store::{Persist, StateStore};

// Import UI builder functions
use super::sender::{Reply, ReplySender};
use super::ui_builder::{
    create_field_menu_keyboard, format_bill, format_invalid_number, format_value_prompt,
    format_value_saved, truncate_message, MESSAGE_LIMIT,
};

/// Room left for the echo label inside one Telegram message
const ECHO_LIMIT: usize = MESSAGE_LIMIT - 16;

/// What a free-text message did to the conversation
#[derive(Clone, Debug, PartialEq)]
enum TextOutcome {
    NotExpected,
    Invalid(Field),
    Accepted(Field, f64, Step),
}

/// Reset the chat to an empty record and offer the value menu
pub async fn start_new_calculation(
    sender: &dyn ReplySender,
    store: &StateStore,
    chat_id: ChatId,
) -> Result<()> {
    store.put(chat_id, ChatState::default()).await;
    info!(chat_id = %chat_id, "Conversation reset");

    sender
        .send_reply(Reply::with_keyboard(
            chat_id,
            t("menu-prompt"),
            create_field_menu_keyboard(),
        ))
        .await?;
    Ok(())
}

/// Mark `field` as the next value to collect and prompt for it
pub async fn expect_field(
    sender: &dyn ReplySender,
    store: &StateStore,
    chat_id: ChatId,
    field: Field,
) -> Result<()> {
    store
        .modify(chat_id, |state| {
            state.expecting = Some(field);
            ((), Persist::Keep)
        })
        .await;
    debug!(chat_id = %chat_id, field = %field, "Awaiting value");

    sender
        .send_reply(Reply::text(chat_id, format_value_prompt(field)))
        .await?;
    Ok(())
}

/// Handle free text: fill the expected value, or echo when nothing is expected
pub async fn handle_free_text(
    sender: &dyn ReplySender,
    store: &StateStore,
    chat_id: ChatId,
    text: &str,
) -> Result<()> {
    let outcome = store
        .modify(chat_id, |state| {
            let Some(field) = state.expecting else {
                return (TextOutcome::NotExpected, Persist::Keep);
            };

            match parse_reading(text) {
                Err(_) => (TextOutcome::Invalid(field), Persist::Keep),
                Ok(value) => {
                    let step = state.accept(field, value);
                    let persist = match step {
                        Step::Completed(_) => Persist::Remove,
                        _ => Persist::Keep,
                    };
                    (TextOutcome::Accepted(field, value, step), persist)
                }
            }
        })
        .await;

    let reply = match outcome {
        TextOutcome::NotExpected => {
            t_args("echo", &[("text", &truncate_message(text, ECHO_LIMIT))])
        }
        TextOutcome::Invalid(field) => {
            debug!(chat_id = %chat_id, field = %field, "Rejected non-numeric input");
            format_invalid_number(field)
        }
        TextOutcome::Accepted(field, value, step) => {
            debug!(chat_id = %chat_id, field = %field, value, "Value stored");
            match step {
                Step::Stored => format_value_saved(field, value),
                Step::NeedPrice => format_value_prompt(Field::Price),
                Step::OutOfOrder => {
                    info!(chat_id = %chat_id, "Current reading below previous, readings cleared");
                    t("error-out-of-order")
                }
                Step::OutOfRange => {
                    info!(chat_id = %chat_id, "Result out of range, readings cleared");
                    t("error-out-of-range")
                }
                Step::Completed(bill) => {
                    info!(
                        chat_id = %chat_id,
                        consumption = bill.consumption,
                        total_cost = bill.total_cost,
                        "Calculation completed"
                    );
                    format_bill(&bill)
                }
            }
        }
    };

    sender.send_reply(Reply::text(chat_id, reply)).await?;
    Ok(())
}
