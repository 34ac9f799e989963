use serde::{Deserialize, Serialize};
use std::fmt;

use super::defaults::*;

/// Environment variable that overrides `telegram.bot_token`.
pub const BOT_TOKEN_ENV: &str = "CHECKLIST_BOT_TOKEN";

/// Telegram delivery config.
///
/// The token is never compiled in. Set it here, via `CHECKLIST_BOT_TOKEN`,
/// or point `api_base` at a relay that holds it.
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Target conversation: numeric id (e.g. `-1001234567890`) or `@channel`.
    #[serde(default)]
    pub chat_id: String,
    #[serde(default = "default_parse_mode")]
    pub parse_mode: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Maximum characters per `sendMessage` call.
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            parse_mode: default_parse_mode(),
            api_base: default_api_base(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.bot_token.is_empty() {
            ""
        } else {
            "[redacted]"
        };
        f.debug_struct("TelegramConfig")
            .field("bot_token", &token)
            .field("chat_id", &self.chat_id)
            .field("parse_mode", &self.parse_mode)
            .field("api_base", &self.api_base)
            .field("max_chunk_chars", &self.max_chunk_chars)
            .finish()
    }
}

impl TelegramConfig {
    /// Replace the token with `CHECKLIST_BOT_TOKEN` when that is set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(BOT_TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.bot_token = token.trim().to_string();
            }
        }
    }

    /// Whether both the token and the target chat are set.
    pub fn is_configured(&self) -> bool {
        !self.bot_token.is_empty() && !self.chat_id.is_empty()
    }
}
