//! Text rendering for the CLI subcommands that only read state.

use crate::i18n;
use checklist_core::config::Config;
use checklist_core::form::{Form, Selector};

/// The form as currently shown, with field keys so values can be `set`.
pub fn render_form(form: &Form, lang: &str) -> String {
    let mut out = String::new();

    if let Some(name) = &form.name {
        out.push_str(&format!(
            "\u{1f468}\u{200d}\u{1f373} [{}] {}\n",
            name.key,
            selector_line(name, lang)
        ));
        out.push('\n');
    }

    for section in &form.sections {
        out.push_str(&format!("\u{1f538} {}\n", section.title.shown()));
        for item in &section.items {
            out.push_str(&format!(
                "  [{}] {}: {}\n",
                item.selector.key,
                item.label.shown(),
                selector_line(&item.selector, lang)
            ));
        }
        if let Some(comment) = &section.comment {
            out.push_str(&format!(
                "  \u{1f4ac} [{}] {}\n",
                comment.key,
                comment.trimmed().unwrap_or_default()
            ));
        }
        out.push('\n');
    }

    out
}

/// `selected text  (choices: v1=text, v2=text)`
fn selector_line(selector: &Selector, lang: &str) -> String {
    let current = selector
        .choices()
        .iter()
        .find(|c| c.value == selector.value())
        .map(|c| c.label.shown())
        .unwrap_or_default();
    let options: Vec<String> = selector
        .choices()
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| format!("{}={}", c.value, c.label.shown()))
        .collect();
    format!(
        "{current}  ({}: {})",
        i18n::t("choices", lang),
        options.join(", ")
    )
}

/// Configuration summary for `checklist status`.
pub fn render_status(cfg: &Config, config_path: &str, form: Option<&Form>) -> String {
    let mut out = format!("Checklist \u{2014} Status\n\nConfig: {config_path}\n");
    out.push_str(&format!("Form: {}\n", cfg.checklist.form));
    match form {
        Some(f) => out.push_str(&format!(
            "  sections: {}, fields: {}\n",
            f.sections.len(),
            f.snapshot().len()
        )),
        None => out.push_str("  not loaded\n"),
    }
    out.push_str(&format!("Language: {}\n", cfg.checklist.language));
    out.push_str(&format!(
        "Message languages: {}\n",
        cfg.checklist.languages.join(", ")
    ));
    out.push_str(&format!(
        "Item filter: {}\n",
        cfg.checklist.item_filter.display_name()
    ));
    out.push_str(&format!("Store: {}\n", cfg.store.db_path));

    let tg = &cfg.telegram;
    out.push_str(&format!(
        "\n  telegram: {}\n",
        if tg.is_configured() {
            "configured"
        } else if tg.bot_token.is_empty() {
            "missing bot_token"
        } else {
            "missing chat_id"
        }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::kitchen_form;

    #[test]
    fn test_render_form_shows_keys_and_values() {
        let mut form = kitchen_form();
        form.set_field("borscht", "2").unwrap();
        form.set_field("soups_comment", "extra sauce").unwrap();
        let out = render_form(&form, "ru");
        assert!(out.contains("\u{1f538} Супы\n"));
        assert!(out.contains("  [borscht] Борщ: 2 шт  (варианты: 1=1 шт, 2=2 шт)\n"));
        assert!(out.contains("  [solyanka] Солянка: \u{2014}  ("));
        assert!(out.contains("\u{1f4ac} [soups_comment] extra sauce\n"));
        assert!(out.contains("[chef] \u{2014}  ("));
    }

    #[test]
    fn test_render_form_follows_applied_language() {
        let mut form = kitchen_form();
        form.apply_language("en");
        let out = render_form(&form, "en");
        assert!(out.contains("\u{1f538} Soups\n"));
        assert!(out.contains("[olivier] Olivier:"));
        assert!(out.contains("(choices: 1=1 pc, 2=2 pcs)"));
    }

    #[test]
    fn test_render_status_reports_missing_token() {
        let cfg = Config::default();
        let out = render_status(&cfg, "config.toml", None);
        assert!(out.contains("Config: config.toml"));
        assert!(out.contains("not loaded"));
        assert!(out.contains("Message languages: ru, en"));
        assert!(out.contains("telegram: missing bot_token"));
    }
}
