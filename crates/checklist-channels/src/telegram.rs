//! Telegram Bot API courier.
//!
//! Delivers checklist messages with `sendMessage`.
//! Docs: <https://core.telegram.org/bots/api#sendmessage>

mod send;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use checklist_core::config::TelegramConfig;

/// Courier that posts to one Telegram chat through the Bot API.
pub struct TelegramCourier {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
}

impl TelegramCourier {
    /// Create a new courier from config.
    pub fn new(config: TelegramConfig) -> Self {
        let base_url = format!(
            "{}/bot{}",
            config.api_base.trim_end_matches('/'),
            config.bot_token
        );
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Target chat identifier.
    pub fn chat_id(&self) -> &str {
        &self.config.chat_id
    }
}
