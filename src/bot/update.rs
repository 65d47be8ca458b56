//! Update classification: turns a raw Telegram update into the few shapes the
//! dispatcher acts on

use teloxide::types::{CallbackQuery, CallbackQueryId, ChatId, Message, Update, UpdateKind};

/// One incoming event, reduced to what the conversation needs
#[derive(Clone, Debug, PartialEq)]
pub enum Incoming {
    /// Text message in a chat
    Text { chat_id: ChatId, text: String },
    /// Inline keyboard selection
    Callback {
        id: CallbackQueryId,
        chat_id: Option<ChatId>,
        data: Option<String>,
    },
    /// Anything the bot does not handle
    Unhandled { kind: &'static str },
}

impl Incoming {
    pub fn from_message(msg: &Message) -> Self {
        match msg.text() {
            Some(text) => Incoming::Text {
                chat_id: msg.chat.id,
                text: text.to_string(),
            },
            None => Incoming::Unhandled {
                kind: "non_text_message",
            },
        }
    }

    pub fn from_callback(q: CallbackQuery) -> Self {
        Incoming::Callback {
            chat_id: q.message.as_ref().map(|msg| msg.chat().id),
            id: q.id,
            data: q.data,
        }
    }
}

impl From<Update> for Incoming {
    fn from(update: Update) -> Self {
        match update.kind {
            UpdateKind::Message(msg) => Incoming::from_message(&msg),
            UpdateKind::CallbackQuery(q) => Incoming::from_callback(q),
            UpdateKind::EditedMessage(_) => Incoming::Unhandled {
                kind: "edited_message",
            },
            UpdateKind::ChannelPost(_) | UpdateKind::EditedChannelPost(_) => {
                Incoming::Unhandled {
                    kind: "channel_post",
                }
            }
            UpdateKind::InlineQuery(_) => Incoming::Unhandled {
                kind: "inline_query",
            },
            UpdateKind::Error(_) => Incoming::Unhandled {
                kind: "unparsed",
            },
            _ => Incoming::Unhandled { kind: "other" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update_from(value: serde_json::Value) -> Update {
        // teloxide's Update deserializer cannot read from a serde_json::Value
        serde_json::from_str(&value.to_string()).unwrap()
    }

    #[test]
    fn test_text_message() {
        let update = update_from(json!({
            "update_id": 1,
            "message": {
                "message_id": 10,
                "date": 1_700_000_000,
                "chat": { "id": 42, "type": "private", "first_name": "Ann" },
                "from": { "id": 42, "is_bot": false, "first_name": "Ann" },
                "text": "150"
            }
        }));

        assert_eq!(
            Incoming::from(update),
            Incoming::Text {
                chat_id: ChatId(42),
                text: "150".to_string()
            }
        );
    }

    #[test]
    fn test_callback_query() {
        let update = update_from(json!({
            "update_id": 2,
            "callback_query": {
                "id": "cb-1",
                "from": { "id": 42, "is_bot": false, "first_name": "Ann" },
                "chat_instance": "ci",
                "data": "set_price",
                "message": {
                    "message_id": 11,
                    "date": 1_700_000_000,
                    "chat": { "id": 42, "type": "private", "first_name": "Ann" },
                    "from": { "id": 999, "is_bot": true, "first_name": "Meter" },
                    "text": "What would you like to enter?"
                }
            }
        }));

        assert_eq!(
            Incoming::from(update),
            Incoming::Callback {
                id: CallbackQueryId("cb-1".to_string()),
                chat_id: Some(ChatId(42)),
                data: Some("set_price".to_string()),
            }
        );
    }

    #[test]
    fn test_callback_without_message() {
        let update = update_from(json!({
            "update_id": 3,
            "callback_query": {
                "id": "cb-2",
                "from": { "id": 42, "is_bot": false, "first_name": "Ann" },
                "chat_instance": "ci",
                "inline_message_id": "inline-1"
            }
        }));

        assert_eq!(
            Incoming::from(update),
            Incoming::Callback {
                id: CallbackQueryId("cb-2".to_string()),
                chat_id: None,
                data: None,
            }
        );
    }

    #[test]
    fn test_photo_message_is_unhandled() {
        let update = update_from(json!({
            "update_id": 5,
            "message": {
                "message_id": 12,
                "date": 1_700_000_000,
                "chat": { "id": 42, "type": "private", "first_name": "Ann" },
                "from": { "id": 42, "is_bot": false, "first_name": "Ann" },
                "photo": [
                    {
                        "file_id": "AgACAgIAAxkBAAIB",
                        "file_unique_id": "AQADm7kxG",
                        "file_size": 1234,
                        "width": 90,
                        "height": 67
                    }
                ]
            }
        }));

        assert_eq!(
            Incoming::from(update),
            Incoming::Unhandled {
                kind: "non_text_message"
            }
        );
    }

    #[test]
    fn test_edited_message_is_unhandled() {
        let update = update_from(json!({
            "update_id": 4,
            "edited_message": {
                "message_id": 10,
                "date": 1_700_000_000,
                "edit_date": 1_700_000_100,
                "chat": { "id": 42, "type": "private", "first_name": "Ann" },
                "from": { "id": 42, "is_bot": false, "first_name": "Ann" },
                "text": "151"
            }
        }));

        assert!(matches!(Incoming::from(update), Incoming::Unhandled { .. }));
    }
}
