//! TOML form definition and its conversion into a live [`Form`].

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use super::localize::{Labeled, LocalizedText, PLACEHOLDER};
use super::{Choice, CommentField, Form, Item, Section, Selector};
use crate::error::ChecklistError;

fn default_choice_set() -> String {
    "qty".to_string()
}

/// Parsed `form.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormDefinition {
    /// Named choice sets shared by items (e.g. `qty`).
    #[serde(default)]
    pub choices: BTreeMap<String, Vec<ChoiceDef>>,
    /// The person/name selector.
    #[serde(default)]
    pub name: Option<NameDef>,
    #[serde(default)]
    pub sections: Vec<SectionDef>,
}

/// One selector option: `{ value = "1", ru = "1 шт", en = "1 pc" }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceDef {
    pub value: String,
    #[serde(flatten)]
    pub text: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameDef {
    pub key: String,
    #[serde(default)]
    pub choices: Vec<ChoiceDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionDef {
    pub key: String,
    pub title: LocalizedText,
    /// Key of the comment field that follows this section, if any.
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub key: String,
    pub label: LocalizedText,
    /// Message-only label that takes precedence over `label`.
    #[serde(default)]
    pub label_override: Option<LocalizedText>,
    /// Name of the choice set in `[choices]`.
    #[serde(default = "default_choice_set")]
    pub choices: String,
}

impl FormDefinition {
    pub fn parse(content: &str) -> Result<Self, ChecklistError> {
        toml::from_str(content)
            .map_err(|e| ChecklistError::Config(format!("failed to parse form definition: {e}")))
    }

    /// Read and parse a definition file.
    pub fn load(path: &str) -> Result<Self, ChecklistError> {
        let path = Path::new(path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChecklistError::Config(format!("failed to read form {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Build the live form, shown in `lang`. Field keys must be unique.
    pub fn build(&self, lang: &str) -> Result<Form, ChecklistError> {
        let mut seen = HashSet::new();
        let mut claim = |key: &str| -> Result<(), ChecklistError> {
            if key.is_empty() {
                return Err(ChecklistError::Config("empty field key".to_string()));
            }
            if !seen.insert(key.to_string()) {
                return Err(ChecklistError::Config(format!("duplicate field key: {key}")));
            }
            Ok(())
        };

        let name = match &self.name {
            Some(def) => {
                claim(&def.key)?;
                Some(Selector::new(
                    &def.key,
                    None,
                    build_choices(&def.choices, lang),
                ))
            }
            None => None,
        };

        let mut sections = Vec::with_capacity(self.sections.len());
        for def in &self.sections {
            let mut items = Vec::with_capacity(def.items.len());
            for item in &def.items {
                claim(&item.key)?;
                let set = self.choices.get(&item.choices).ok_or_else(|| {
                    ChecklistError::Config(format!(
                        "item {} references unknown choice set {}",
                        item.key, item.choices
                    ))
                })?;
                items.push(Item {
                    label: Labeled::new(item.label.clone(), lang),
                    selector: Selector::new(
                        &item.key,
                        item.label_override.clone(),
                        build_choices(set, lang),
                    ),
                });
            }

            let comment = match &def.comment {
                Some(key) => {
                    claim(key)?;
                    Some(CommentField::new(key))
                }
                None => None,
            };

            sections.push(Section {
                key: def.key.clone(),
                title: Labeled::new(def.title.clone(), lang),
                items,
                comment,
            });
        }

        let mut form = Form { name, sections };
        form.apply_language(lang);
        Ok(form)
    }
}

fn build_choices(defs: &[ChoiceDef], lang: &str) -> Vec<Choice> {
    defs.iter()
        .map(|d| {
            let text = if d.value.is_empty() && d.text.is_empty() {
                LocalizedText::uniform(&[lang], PLACEHOLDER)
            } else {
                d.text.clone()
            };
            Choice::new(&d.value, Labeled::new(text, lang))
        })
        .collect()
}
