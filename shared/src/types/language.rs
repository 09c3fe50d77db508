//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language preference for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::Japanese
    }
}

impl Language {
    /// Pick a language from a Discord user locale such as `ja` or `en-US`
    ///
    /// Anything that is not Japanese falls back to English. An empty locale
    /// (not reported by the client) keeps the default.
    pub fn from_locale(locale: &str) -> Self {
        let locale = locale.trim().to_lowercase();
        if locale.is_empty() {
            Language::default()
        } else if locale.starts_with("ja") {
            Language::Japanese
        } else {
            Language::English
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ja" | "jp" | "japanese" | "日本語" => Ok(Language::Japanese),
            "en" | "eng" | "english" => Ok(Language::English),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
