//! Internationalization — fixed strings of the checklist message and the CLI.
//!
//! Uses `t(key, lang)` for static strings and `format_*`-style helpers for
//! strings with interpolation. Languages are ISO codes: `ru` and `en`;
//! anything else falls back to English.

mod format;


pub use format::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages, `"???"` for unknown keys.
pub fn t(key: &str, lang: &str) -> &'static str {
    match key {
        // --- Message ---
        "checklist_title" => match lang {
            "ru" => "Чеклист",
            _ => "Checklist",
        },
        "date" => match lang {
            "ru" => "Дата",
            _ => "Date",
        },
        "name" => match lang {
            "ru" => "Имя",
            _ => "Name",
        },
        "comment" => match lang {
            "ru" => "Комментарий",
            _ => "Comment",
        },

        // --- CLI ---
        "sent_ok" => match lang {
            "ru" => "\u{2705} Чеклист отправлен!",
            _ => "\u{2705} Checklist sent!",
        },
        "send_failed" => match lang {
            "ru" => "\u{274c} Ошибка при отправке",
            _ => "\u{274c} Sending failed",
        },
        "form_cleared" => match lang {
            "ru" => "Форма очищена.",
            _ => "Form cleared.",
        },
        "form_not_cleared" => match lang {
            "ru" => "\u{26a0}\u{fe0f} Форма не очищена. Не отправляйте повторно, \
                     выполните `checklist reset`.",
            _ => "\u{26a0}\u{fe0f} Form not cleared. Do not send again, \
                  run `checklist reset`.",
        },
        "field_saved" => match lang {
            "ru" => "Сохранено",
            _ => "Saved",
        },
        "choices" => match lang {
            "ru" => "варианты",
            _ => "choices",
        },
        _ => "???",
    }
}
