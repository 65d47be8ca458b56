//! Meter reading dialogue module for handling conversation state with users.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric value the conversation can collect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Previous,
    Current,
    Price,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Previous, Field::Current, Field::Price];

    /// Callback data carried by the menu button for this field
    pub fn action_id(self) -> &'static str {
        match self {
            Field::Previous => "set_previous",
            Field::Current => "set_current",
            Field::Price => "set_price",
        }
    }

    /// Resolve callback data back into a field
    pub fn from_action_id(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.action_id() == data)
    }

    /// Message key of the human-readable field name
    pub fn name_key(self) -> &'static str {
        match self {
            Field::Previous => "field-previous",
            Field::Current => "field-current",
            Field::Price => "field-price",
        }
    }

    /// Message key of the menu button label
    pub fn button_key(self) -> &'static str {
        match self {
            Field::Previous => "menu-set-previous",
            Field::Current => "menu-set-current",
            Field::Price => "menu-set-price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Previous => "previous",
            Field::Current => "current",
            Field::Price => "price",
        })
    }
}

/// Per-chat conversation record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    /// Field the next free-text message fills
    pub expecting: Option<Field>,
    pub previous_value: Option<f64>,
    pub current_value: Option<f64>,
    pub price: Option<f64>,
}

/// Finished calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bill {
    pub previous: f64,
    pub current: f64,
    pub price: f64,
    pub consumption: f64,
    pub total_cost: f64,
}

/// Outcome of storing one value into a [`ChatState`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Value stored, more values needed
    Stored,
    /// Both readings known, price is now expected
    NeedPrice,
    /// Current reading below previous; readings were cleared
    OutOfOrder,
    /// Result does not fit in a finite number; readings were cleared
    OutOfRange,
    /// All values known; the record should be dropped
    Completed(Bill),
}

impl ChatState {
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Previous => self.previous_value,
            Field::Current => self.current_value,
            Field::Price => self.price,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<f64> {
        match field {
            Field::Previous => &mut self.previous_value,
            Field::Current => &mut self.current_value,
            Field::Price => &mut self.price,
        }
    }

    /// Store a parsed value, clear the expectation and advance the conversation
    pub fn accept(&mut self, field: Field, value: f64) -> Step {
        *self.slot(field) = Some(value);
        self.expecting = None;

        match (self.previous_value, self.current_value, self.price) {
            (Some(_), Some(_), None) => {
                self.expecting = Some(Field::Price);
                Step::NeedPrice
            }
            (Some(previous), Some(current), Some(price)) => {
                if current < previous {
                    self.previous_value = None;
                    self.current_value = None;
                    return Step::OutOfOrder;
                }
                let consumption = current - previous;
                let total_cost = consumption * price;
                if !consumption.is_finite() || !total_cost.is_finite() {
                    self.previous_value = None;
                    self.current_value = None;
                    return Step::OutOfRange;
                }
                Step::Completed(Bill {
                    previous,
                    current,
                    price,
                    consumption,
                    total_cost,
                })
            }
            _ => Step::Stored,
        }
    }
}

/// Why a text could not be read as a number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingError {
    Empty,
    NotANumber,
    NotFinite,
}

/// Parses a decimal number typed by the user, accepting `,` as the separator
pub fn parse_reading(input: &str) -> Result<f64, ReadingError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ReadingError::Empty);
    }

    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let value: f64 = normalized.parse().map_err(|_| ReadingError::NotANumber)?;
    if !value.is_finite() {
        return Err(ReadingError::NotFinite);
    }

    Ok(value)
}
