//! Form controller: owns the live form, the local store and the session.
//!
//! Split into focused submodules:
//! - `persistence` — save/restore of the form snapshot
//! - `submit` — chunked sequential delivery and the post-submit reset

mod persistence;
mod submit;


pub use submit::{send_all_parts, SubmitReport};

use crate::message::{build_message, format_date};
use chrono::{Local, NaiveDate};
use checklist_core::{
    config::{Config, ItemFilter},
    error::ChecklistError,
    form::Form,
    traits::LocalStore,
};
use tracing::info;

/// Per-run context that used to be page-global state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Key the form snapshot lives under.
    pub storage_key: String,
    /// `DD/MM`, captured when the session starts.
    pub date: String,
    /// Display language of the form.
    pub language: String,
    /// Message languages, in sending order.
    pub languages: Vec<String>,
    pub item_filter: ItemFilter,
    pub max_chunk_chars: usize,
}

impl Session {
    /// Session for `cfg`, dated today.
    pub fn from_config(cfg: &Config) -> Self {
        Self::for_date(cfg, Local::now().date_naive())
    }

    /// Session for `cfg` with a fixed date.
    pub fn for_date(cfg: &Config, date: NaiveDate) -> Self {
        Self {
            storage_key: cfg.checklist.storage_key.clone(),
            date: format_date(date),
            language: cfg.checklist.language.clone(),
            languages: cfg.checklist.languages.clone(),
            item_filter: cfg.checklist.item_filter,
            max_chunk_chars: cfg.telegram.max_chunk_chars,
        }
    }
}

pub struct Controller {
    session: Session,
    form: Form,
    store: Box<dyn LocalStore>,
}

impl Controller {
    pub fn new(session: Session, form: Form, store: Box<dyn LocalStore>) -> Self {
        Self {
            session,
            form,
            store,
        }
    }

    /// Start-up: restore persisted values, then show the session language.
    pub async fn start(&mut self) {
        let restored = self.restore().await;
        let lang = self.session.language.clone();
        self.form.apply_language(&lang);
        info!(
            "checklist ready: {} sections, {restored} fields restored, language {lang}",
            self.form.sections.len()
        );
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Re-localize the form for display.
    pub fn switch_language(&mut self, lang: &str) {
        self.session.language = lang.to_string();
        self.form.apply_language(lang);
    }

    /// Field change: update the live value, then persist the whole form.
    pub async fn change(&mut self, key: &str, value: &str) -> Result<(), ChecklistError> {
        self.form.set_field(key, value)?;
        self.save().await
    }

    /// Message for one language from the current field values.
    pub fn build(&self, lang: &str) -> String {
        build_message(
            &self.form,
            &self.session.date,
            lang,
            self.session.item_filter,
        )
    }

    /// One message per session language, in sending order.
    pub fn build_all(&self) -> Vec<(String, String)> {
        self.session
            .languages
            .iter()
            .map(|lang| (lang.clone(), self.build(lang)))
            .collect()
    }
}
