//! # checklist-channels
//!
//! Delivery integrations for finished checklist messages.

pub mod telegram;
pub mod utils;

pub use telegram::TelegramCourier;
pub use utils::split_message;
