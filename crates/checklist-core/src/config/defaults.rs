//! Default value functions used by serde for config deserialization.

pub fn default_data_dir() -> String {
    "~/.checklist".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_form_path() -> String {
    "form.toml".to_string()
}

pub fn default_language() -> String {
    "ru".to_string()
}

pub fn default_languages() -> Vec<String> {
    vec!["ru".to_string(), "en".to_string()]
}

pub fn default_storage_key() -> String {
    "formData".to_string()
}

pub fn default_db_path() -> String {
    "~/.checklist/data/store.db".to_string()
}

pub fn default_parse_mode() -> String {
    "HTML".to_string()
}

pub fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

pub fn default_max_chunk_chars() -> usize {
    4000
}
