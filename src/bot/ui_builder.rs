//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::{t, t_args};

// Import dialogue types
use crate::dialogue::{Bill, Field};

/// Longest text Telegram accepts in one message, in UTF-16 code units
pub const MESSAGE_LIMIT: usize = 4096;

/// Cut `text` so it takes at most `limit` UTF-16 code units, marking the cut with `…`
pub fn truncate_message(text: &str, limit: usize) -> String {
    if text.encode_utf16().count() <= limit {
        return text.to_string();
    }

    let mut used = 1; // the ellipsis
    let mut result = String::new();
    for c in text.chars() {
        used += c.len_utf16();
        if used > limit {
            break;
        }
        result.push(c);
    }
    result.push('…');
    result
}

/// Create the inline keyboard offering the three values, one per row
pub fn create_field_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = Field::ALL
        .into_iter()
        .map(|field| {
            vec![InlineKeyboardButton::callback(
                t(field.button_key()),
                field.action_id(),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Prompt asking for a numeric value
pub fn format_value_prompt(field: Field) -> String {
    t_args("prompt-enter-value", &[("field", &t(field.name_key()))])
}

/// Validation error for text that is not a number
pub fn format_invalid_number(field: Field) -> String {
    t_args("error-not-a-number", &[("field", &t(field.name_key()))])
}

/// Confirmation after a value was stored
pub fn format_value_saved(field: Field, value: f64) -> String {
    t_args(
        "value-saved",
        &[("field", &t(field.name_key())), ("value", &value.to_string())],
    )
}

/// Final calculation summary
pub fn format_bill(bill: &Bill) -> String {
    t_args(
        "result-summary",
        &[
            ("previous", &bill.previous.to_string()),
            ("current", &bill.current.to_string()),
            ("consumption", &format!("{:.2}", bill.consumption)),
            ("price", &format!("{:.2}", bill.price)),
            ("total", &format!("{:.2}", bill.total_cost)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_menu_keyboard_layout() {
        let keyboard = create_field_menu_keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 3);

        let data: Vec<String> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(data, vec!["set_previous", "set_current", "set_price"]);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "Set previous reading");
    }

    #[test]
    fn test_format_bill() {
        let bill = Bill {
            previous: 100.0,
            current: 150.0,
            price: 0.25,
            consumption: 50.0,
            total_cost: 12.5,
        };
        let text = format_bill(&bill);
        assert!(text.contains("Previous reading: 100"));
        assert!(text.contains("Current reading: 150"));
        assert!(text.contains("Consumption: 50.00"));
        assert!(text.contains("Price per unit: 0.25"));
        assert!(text.contains("Total cost: 12.50"));
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("abcdef", 4), "abc…");

        // Emoji take two UTF-16 units each and are never split
        let cut = truncate_message(&"😀".repeat(10), 6);
        assert_eq!(cut, "😀😀…");
        assert!(cut.encode_utf16().count() <= 6);
    }

    #[test]
    fn test_prompts_name_the_field() {
        assert_eq!(
            format_value_prompt(Field::Current),
            "Please enter the current reading:"
        );
        assert!(format_invalid_number(Field::Price).contains("price per unit"));
    }
}
