//! Configuration for the verification service

use kv_shared::config::verification::{VerificationConfig, DEFAULT_ROOT_DOMAIN};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Root of the email domain allow-list
    pub allowed_root_domain: String,
    /// Minutes before an issued code expires; `None` disables expiry
    pub code_ttl_minutes: Option<i64>,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            allowed_root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
            code_ttl_minutes: None,
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            allowed_root_domain: config.allowed_root_domain.clone(),
            code_ttl_minutes: config.code_ttl_minutes,
        }
    }
}
