//! Per-language text lookup, decoupled from any rendered page.
//!
//! A [`LocalizedText`] is the table an element carries (`{ ru = "...", en = "..." }`).
//! [`display_text`] decides what the element shows for a language; [`Labeled`]
//! keeps the shown text next to its table so the form can be re-localized in
//! place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Glyph shown for the empty choice and for anything that has no value.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Mapping from language code to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literals and tests.
    pub fn with(mut self, lang: &str, text: &str) -> Self {
        self.0.insert(lang.to_string(), text.to_string());
        self
    }

    /// Same text for every language in `langs`.
    pub fn uniform(langs: &[&str], text: &str) -> Self {
        langs.iter().fold(Self::new(), |t, lang| t.with(lang, text))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First variant in language-code order, used before any language is applied.
    fn first(&self) -> Option<&str> {
        self.0.values().map(String::as_str).find(|v| !v.is_empty())
    }
}

/// Look up the variant for `lang`. Empty variants count as missing.
pub fn localize<'a>(lang: &str, table: &'a LocalizedText) -> Option<&'a str> {
    table
        .0
        .get(lang)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Text an element should show for `lang`.
///
/// The empty choice always shows [`PLACEHOLDER`]. Otherwise the variant for
/// `lang` wins; without one, `current` is kept unchanged.
pub fn display_text(
    lang: &str,
    table: &LocalizedText,
    current: &str,
    is_empty_choice: bool,
) -> String {
    if is_empty_choice {
        return PLACEHOLDER.to_string();
    }
    localize(lang, table).unwrap_or(current).to_string()
}

/// A localized element together with the text it currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled {
    text: LocalizedText,
    shown: String,
}

impl Labeled {
    /// Create an element showing its `lang` variant, or any variant if that is missing.
    pub fn new(text: LocalizedText, lang: &str) -> Self {
        let shown = localize(lang, &text)
            .or_else(|| text.first())
            .unwrap_or_default()
            .to_string();
        Self { text, shown }
    }

    pub fn text(&self) -> &LocalizedText {
        &self.text
    }

    /// The currently displayed text.
    pub fn shown(&self) -> &str {
        &self.shown
    }

    /// Variant for `lang`, if one exists.
    pub fn get(&self, lang: &str) -> Option<&str> {
        localize(lang, &self.text)
    }

    /// Re-localize in place.
    pub fn apply(&mut self, lang: &str, is_empty_choice: bool) {
        self.shown = display_text(lang, &self.text, &self.shown, is_empty_choice);
    }
}
