//! Checklist message builder.
//!
//! Walks the form in document order and renders one summary per language,
//! formatted for Telegram's HTML parse mode.


use crate::i18n::t;
use chrono::NaiveDate;
use checklist_core::config::ItemFilter;
use checklist_core::form::{localize, CommentField, Form, Item, Section, PLACEHOLDER};

/// `DD/MM`, the date format of the message header.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Escape text interpolated into an HTML-mode message.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the message for `lang`.
///
/// `date` is the already formatted session date.
pub fn build_message(form: &Form, date: &str, lang: &str, filter: ItemFilter) -> String {
    let name = form
        .name
        .as_ref()
        .and_then(|s| s.selected())
        .and_then(|c| c.label.get(lang))
        .unwrap_or(PLACEHOLDER);

    let mut message = format!(
        "\u{1f9fe} <b>{}</b>\n\n\
         \u{1f4c5} {}: {date}\n\
         \u{1f468}\u{200d}\u{1f373} {}: {}\n\n",
        t("checklist_title", lang),
        t("date", lang),
        t("name", lang),
        escape_html(name),
    );

    for section in &form.sections {
        if let Some(block) = section_block(section, lang, filter) {
            message.push_str(&block);
        }
    }

    message
}

/// One section: header, item lines, optional comment, blank line.
/// `None` when the filter drops the section.
fn section_block(section: &Section, lang: &str, filter: ItemFilter) -> Option<String> {
    let lines: Vec<String> = section
        .items
        .iter()
        .filter(|item| filter == ItemFilter::All || !item.selector.is_empty())
        .map(|item| item_line(item, lang))
        .collect();

    let comment = section.comment.as_ref().and_then(CommentField::trimmed);

    if filter == ItemFilter::Selected && lines.is_empty() && comment.is_none() {
        return None;
    }

    let title = section.title.get(lang).unwrap_or_default();
    let mut block = format!("\u{1f538} <b>{}</b>\n", escape_html(title));
    for line in lines {
        block.push_str(&line);
    }
    if let Some(comment) = comment {
        block.push_str(&format!(
            "\u{1f4ac} {}: {}\n",
            t("comment", lang),
            escape_html(comment)
        ));
    }
    block.push('\n');
    Some(block)
}

fn item_line(item: &Item, lang: &str) -> String {
    let label = item
        .selector
        .label_override
        .as_ref()
        .and_then(|o| localize(lang, o))
        .or_else(|| item.label.get(lang))
        .unwrap_or(PLACEHOLDER);

    let value = item
        .selector
        .selected()
        .and_then(|c| c.label.get(lang))
        .unwrap_or(PLACEHOLDER);

    format!("\u{2022} {}: {}\n", escape_html(label), escape_html(value))
}
