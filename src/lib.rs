//! # Meter Bot
//!
//! A Telegram webhook bot that collects a previous meter reading, a current
//! meter reading and a price per unit, then replies with the consumption cost.

pub mod bot;
pub mod config;
pub mod dialogue;
pub mod errors;
pub mod localization;
pub mod server;
pub mod store;
