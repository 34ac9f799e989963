//! Message sending and acknowledgment handling.

use super::types::{TgResponse, TgSentMessage};
use super::TelegramCourier;
use async_trait::async_trait;
use checklist_core::{error::ChecklistError, traits::Courier};
use tracing::{debug, warn};

impl TelegramCourier {
    /// JSON body for one `sendMessage` call.
    pub(crate) fn request_body(&self, text: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "chat_id": self.config.chat_id,
            "text": text,
        });
        if !self.config.parse_mode.is_empty() {
            body["parse_mode"] = serde_json::Value::String(self.config.parse_mode.clone());
        }
        body
    }
}

/// Turn a raw `sendMessage` response into a delivery result.
///
/// Telegram answers failures with a non-2xx status and the same JSON
/// envelope, so the body decides, not the status.
pub(crate) fn acknowledge(status: u16, raw: &str) -> Result<(), ChecklistError> {
    let resp: TgResponse<TgSentMessage> = serde_json::from_str(raw).map_err(|e| {
        let preview: String = raw.chars().take(120).collect();
        ChecklistError::Channel(format!(
            "unreadable telegram response ({status}): {e}: {preview}"
        ))
    })?;

    if resp.ok {
        if let Some(msg) = &resp.result {
            debug!("telegram accepted message {}", msg.message_id);
        }
        return Ok(());
    }

    let description = resp
        .description
        .unwrap_or_else(|| format!("telegram returned {status}"));
    warn!(
        "telegram rejected message ({}): {description}",
        resp.error_code.unwrap_or(i64::from(status))
    );
    Err(ChecklistError::Delivery(description))
}

#[async_trait]
impl Courier for TelegramCourier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn deliver(&self, text: &str) -> Result<(), ChecklistError> {
        let url = format!("{}/sendMessage", self.base_url);

        // Errors are stripped of the URL: it embeds the bot token.
        let resp = self
            .client
            .post(&url)
            .json(&self.request_body(text))
            .send()
            .await
            .map_err(|e| {
                ChecklistError::Channel(format!("telegram send failed: {}", e.without_url()))
            })?;

        let status = resp.status().as_u16();
        let raw = resp.text().await.map_err(|e| {
            ChecklistError::Channel(format!("telegram response read failed: {}", e.without_url()))
        })?;

        acknowledge(status, &raw)
    }
}
