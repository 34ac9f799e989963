mod defaults;
mod telegram;


pub use telegram::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::ChecklistError;
use defaults::*;

/// Top-level Checklist configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checklist: ChecklistConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Which items the message builder lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemFilter {
    /// Only items with a selection; empty sections are dropped (default).
    #[default]
    Selected,
    /// Every item, unselected ones shown with a placeholder.
    All,
}

impl ItemFilter {
    /// Human-readable name for display (e.g. in `checklist status`).
    pub fn display_name(&self) -> &str {
        match self {
            Self::Selected => "selected",
            Self::All => "all",
        }
    }
}

/// General controller settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Path to the form definition.
    #[serde(default = "default_form_path")]
    pub form: String,
    /// Language the form is displayed in.
    #[serde(default = "default_language")]
    pub language: String,
    /// Languages a message is built and sent for, in sending order.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Key the form snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub item_filter: ItemFilter,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            form: default_form_path(),
            language: default_language(),
            languages: default_languages(),
            storage_key: default_storage_key(),
            item_filter: ItemFilter::default(),
        }
    }
}

/// Local store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite file, or `:memory:`.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. The bot token
/// environment override is applied either way.
pub fn load(path: &str) -> Result<Config, ChecklistError> {
    let mut config = parse_file(path)?;
    config.telegram.apply_env();
    config.validate()?;
    Ok(config)
}

fn parse_file(path: &str) -> Result<Config, ChecklistError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ChecklistError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| ChecklistError::Config(format!("failed to parse config: {}", e)))
}

impl Config {
    /// Reject settings the controller cannot run with.
    pub fn validate(&self) -> Result<(), ChecklistError> {
        if self.checklist.languages.is_empty() {
            return Err(ChecklistError::Config(
                "checklist.languages must list at least one language".to_string(),
            ));
        }
        if self.checklist.storage_key.is_empty() {
            return Err(ChecklistError::Config(
                "checklist.storage_key must not be empty".to_string(),
            ));
        }
        if self.telegram.max_chunk_chars == 0 {
            return Err(ChecklistError::Config(
                "telegram.max_chunk_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
