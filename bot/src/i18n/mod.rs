//! Localized user-facing texts
//!
//! The catalog is embedded at compile time; a file at `i18n/messages.toml`
//! relative to the working directory overrides it, so wording can be changed
//! without a rebuild.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use kv_shared::Language;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Error code used when a code has no entry of its own
pub const FALLBACK_ERROR: &str = "INTERNAL_ERROR";

const OVERRIDE_PATH: &str = "i18n/messages.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub ja: String,
    pub en: String,
}

impl Message {
    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::Japanese => &self.ja,
            Language::English => &self.en,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub responses: HashMap<String, Message>,
    #[serde(default)]
    pub errors: HashMap<String, Message>,
}

pub static MESSAGES: Lazy<Messages> = Lazy::new(|| match load_messages() {
    Ok(messages) => messages,
    Err(e) => {
        tracing::error!(error = %e, "Failed to load message catalog, texts fall back to keys");
        Messages::default()
    }
});

fn load_messages() -> Result<Messages, Box<dyn std::error::Error>> {
    let path = Path::new(OVERRIDE_PATH);
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        load_default_messages()
    }
}

fn load_default_messages() -> Result<Messages, Box<dyn std::error::Error>> {
    let default_catalog = include_str!("../../i18n/messages.toml");
    Ok(toml::from_str(default_catalog)?)
}

/// Localized response text; the key itself when missing
pub fn response(key: &str, lang: Language) -> String {
    MESSAGES
        .responses
        .get(key)
        .map(|m| m.text(lang).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Localized text for a domain error code
pub fn error_message(code: &str, lang: Language) -> String {
    MESSAGES
        .errors
        .get(code)
        .or_else(|| MESSAGES.errors.get(FALLBACK_ERROR))
        .map(|m| m.text(lang).to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
