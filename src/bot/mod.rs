//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `update`: Reduces raw Telegram updates to the shapes the bot handles
//! - `dispatcher`: Routes one update to the matching handler
//! - `message_handler`: Handles commands and free text
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `dialogue_manager`: Manages dialogue state transitions and validation
//! - `ui_builder`: Creates keyboards and formats messages
//! - `sender`: Outbound message capability

pub mod callback_handler;
pub mod dialogue_manager;
pub mod dispatcher;
pub mod message_handler;
pub mod sender;
pub mod ui_builder;
pub mod update;

// Re-export the pieces the server and tests wire together
pub use dispatcher::UpdateDispatcher;
pub use sender::{Reply, ReplySender};
pub use update::Incoming;
