//! Format helpers for strings with interpolation.

use super::t;

/// Confirmation after every language and chunk went out.
pub fn sent_ok(lang: &str, messages: usize, chunks: usize) -> String {
    let head = t("sent_ok", lang);
    match lang {
        "ru" => format!("{head} (сообщений: {messages}, частей: {chunks})"),
        _ => format!("{head} ({messages} messages, {chunks} parts)"),
    }
}

/// Failure notice including the underlying description.
pub fn send_failed(lang: &str, reason: &str) -> String {
    format!("{}: {reason}", t("send_failed", lang))
}

/// Acknowledge a field change.
pub fn field_saved(lang: &str, key: &str, value: &str) -> String {
    format!("{}: {key} = {value:?}", t("field_saved", lang))
}
