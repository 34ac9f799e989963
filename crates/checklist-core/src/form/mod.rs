//! Live form model: the name selector, sections of item selectors, and
//! per-section comment fields.
//!
//! The form holds current values only. Persistence, message building and
//! delivery live in the controller and operate on it.

mod definition;
pub mod localize;


pub use definition::*;
pub use localize::{display_text, localize, Labeled, LocalizedText, PLACEHOLDER};

use crate::error::ChecklistError;
use std::collections::BTreeMap;

/// Field key → value, as persisted in the local store.
pub type Snapshot = BTreeMap<String, String>;

/// One option of a selector. The empty sentinel has `value == ""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: Labeled,
}

impl Choice {
    pub fn new(value: &str, label: Labeled) -> Self {
        Self {
            value: value.to_string(),
            label,
        }
    }

    fn empty() -> Self {
        let mut label = Labeled::new(LocalizedText::new(), "");
        label.apply("", true);
        Self::new("", label)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Single-choice control. Always carries an empty sentinel choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub key: String,
    /// Message label that takes precedence over the item label.
    pub label_override: Option<LocalizedText>,
    choices: Vec<Choice>,
    value: String,
}

impl Selector {
    /// Create a selector with the empty choice selected.
    ///
    /// Inserts an empty sentinel as the first choice when `choices` has none.
    pub fn new(key: &str, label_override: Option<LocalizedText>, mut choices: Vec<Choice>) -> Self {
        if !choices.iter().any(Choice::is_empty) {
            choices.insert(0, Choice::empty());
        }
        Self {
            key: key.to_string(),
            label_override,
            choices,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Whether the empty sentinel is selected.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The selected non-empty choice.
    pub fn selected(&self) -> Option<&Choice> {
        if self.is_empty() {
            return None;
        }
        self.choices.iter().find(|c| c.value == self.value)
    }

    /// Select `value`. Returns `false` and leaves the selection alone when no
    /// such choice exists.
    pub fn select(&mut self, value: &str) -> bool {
        if self.choices.iter().any(|c| c.value == value) {
            self.value = value.to_string();
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    fn apply_language(&mut self, lang: &str) {
        for choice in &mut self.choices {
            let empty = choice.is_empty();
            choice.label.apply(lang, empty);
        }
    }
}

/// Free-text comment field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentField {
    pub key: String,
    pub value: String,
}

impl CommentField {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            value: String::new(),
        }
    }

    /// Comment text with surrounding whitespace removed, if any remains.
    pub fn trimmed(&self) -> Option<&str> {
        let t = self.value.trim();
        (!t.is_empty()).then_some(t)
    }
}

/// Dish/item row: a label and its quantity selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: Labeled,
    pub selector: Selector,
}

/// Titled group of items with an optional trailing comment field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub key: String,
    pub title: Labeled,
    pub items: Vec<Item>,
    pub comment: Option<CommentField>,
}

/// The whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    /// Designated person/name ("chef") selector.
    pub name: Option<Selector>,
    pub sections: Vec<Section>,
}

impl Form {
    /// Re-localize every title, label and choice. Idempotent.
    pub fn apply_language(&mut self, lang: &str) {
        if let Some(name) = &mut self.name {
            name.apply_language(lang);
        }
        for section in &mut self.sections {
            section.title.apply(lang, false);
            for item in &mut section.items {
                item.label.apply(lang, false);
                item.selector.apply_language(lang);
            }
        }
    }

    /// Every selector in document order, name selector first.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.name.iter().chain(
            self.sections
                .iter()
                .flat_map(|s| s.items.iter().map(|i| &i.selector)),
        )
    }

    fn selectors_mut(&mut self) -> impl Iterator<Item = &mut Selector> {
        self.name.iter_mut().chain(
            self.sections
                .iter_mut()
                .flat_map(|s| s.items.iter_mut().map(|i| &mut i.selector)),
        )
    }

    /// Every comment field in document order.
    pub fn comments(&self) -> impl Iterator<Item = &CommentField> {
        self.sections.iter().filter_map(|s| s.comment.as_ref())
    }

    fn comments_mut(&mut self) -> impl Iterator<Item = &mut CommentField> {
        self.sections.iter_mut().filter_map(|s| s.comment.as_mut())
    }

    /// Current value of every field, keyed by field key.
    pub fn snapshot(&self) -> Snapshot {
        let mut snap = Snapshot::new();
        for s in self.selectors() {
            snap.insert(s.key.clone(), s.value.clone());
        }
        for c in self.comments() {
            snap.insert(c.key.clone(), c.value.clone());
        }
        snap
    }

    /// Set every field present in `snap`. Returns how many fields were set.
    ///
    /// A selector value that is not one of its choices resets the selector to
    /// the empty choice. Keys without a live field are ignored.
    pub fn apply_snapshot(&mut self, snap: &Snapshot) -> usize {
        let mut applied = 0;
        for s in self.selectors_mut() {
            if let Some(v) = snap.get(&s.key) {
                if !s.select(v) {
                    s.clear();
                }
                applied += 1;
            }
        }
        for c in self.comments_mut() {
            if let Some(v) = snap.get(&c.key) {
                c.value = v.clone();
                applied += 1;
            }
        }
        applied
    }

    /// Change one field: a selector value or comment text.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), ChecklistError> {
        if let Some(s) = self.selectors_mut().find(|s| s.key == key) {
            if s.select(value) {
                return Ok(());
            }
            let known: Vec<&str> = s
                .choices()
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| c.value.as_str())
                .collect();
            return Err(ChecklistError::Form(format!(
                "{value:?} is not a choice of {key} (choices: {})",
                known.join(", ")
            )));
        }
        if let Some(c) = self.comments_mut().find(|c| c.key == key) {
            c.value = value.to_string();
            return Ok(());
        }
        Err(ChecklistError::Form(format!("unknown field: {key}")))
    }

    /// Current value of a field, if it exists.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.selectors()
            .find(|s| s.key == key)
            .map(Selector::value)
            .or_else(|| {
                self.comments()
                    .find(|c| c.key == key)
                    .map(|c| c.value.as_str())
            })
    }

    /// Every selector back to the empty choice, every comment to `""`.
    pub fn clear(&mut self) {
        for s in self.selectors_mut() {
            s.clear();
        }
        for c in self.comments_mut() {
            c.value.clear();
        }
    }
}
