//! Verification workflow configuration module

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigResult, EnvVars};

/// Default allowed root domain
pub const DEFAULT_ROOT_DOMAIN: &str = "kosen-ac.jp";

/// Default location of the domain to role mapping file
pub const DEFAULT_ROLE_MAPPING_PATH: &str = "roles.json";

/// Default delay before a private onboarding channel is deleted
pub const DEFAULT_CHANNEL_DELETE_DELAY_SECS: u64 = 10;

/// Verification workflow configuration
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Emails must be at this domain or one of its subdomains
    pub allowed_root_domain: String,

    /// Where the domain to role mapping was read from
    pub role_mapping_path: PathBuf,

    /// Email domain -> role id, as found in the mapping file
    pub role_mappings: HashMap<String, String>,

    /// Minutes a code stays valid; `None` keeps codes valid until consumed
    pub code_ttl_minutes: Option<i64>,

    /// Seconds to wait before deleting a verified member's private channel
    pub channel_delete_delay_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            allowed_root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
            role_mapping_path: PathBuf::from(DEFAULT_ROLE_MAPPING_PATH),
            role_mappings: HashMap::new(),
            code_ttl_minutes: None,
            channel_delete_delay_secs: DEFAULT_CHANNEL_DELETE_DELAY_SECS,
        }
    }
}

impl VerificationConfig {
    pub(crate) fn from_vars(vars: &EnvVars<'_>) -> ConfigResult<Self> {
        let allowed_root_domain = vars
            .optional("VERIFY_ROOT_DOMAIN")
            .map(|d| d.trim_matches('.').to_lowercase())
            .unwrap_or_else(|| DEFAULT_ROOT_DOMAIN.to_string());
        if allowed_root_domain.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "VERIFY_ROOT_DOMAIN".to_string(),
                reason: "root domain must contain at least one label".to_string(),
            });
        }

        let code_ttl_minutes = vars.parse_optional::<i64>("VERIFY_CODE_TTL_MINUTES")?;
        if let Some(ttl) = code_ttl_minutes {
            if ttl <= 0 {
                return Err(ConfigError::InvalidValue {
                    name: "VERIFY_CODE_TTL_MINUTES".to_string(),
                    reason: "must be a positive number of minutes".to_string(),
                });
            }
        }

        let (role_mapping_path, role_mappings) = match vars.optional("ROLE_MAPPING_PATH") {
            Some(path) => {
                let path = PathBuf::from(path);
                let mappings = load_role_mappings(&path)?;
                (path, mappings)
            }
            None => {
                let path = PathBuf::from(DEFAULT_ROLE_MAPPING_PATH);
                let mappings = if path.exists() {
                    load_role_mappings(&path)?
                } else {
                    tracing::warn!(
                        path = %path.display(),
                        "Role mapping file not found, no domain-specific roles will be granted"
                    );
                    HashMap::new()
                };
                (path, mappings)
            }
        };

        Ok(Self {
            allowed_root_domain,
            role_mapping_path,
            role_mappings,
            code_ttl_minutes,
            channel_delete_delay_secs: vars
                .parse_or("CHANNEL_DELETE_DELAY_SECS", DEFAULT_CHANNEL_DELETE_DELAY_SECS)?,
        })
    }
}

/// Load the domain to role mapping file
///
/// The file is a flat JSON object, e.g. `{"sub.kosen-ac.jp": "123456789012345678"}`.
/// Domains are lowercased so lookups are case-insensitive.
pub fn load_role_mappings(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        ConfigError::RoleMappingUnreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let raw: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|source| ConfigError::RoleMappingMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mappings: HashMap<String, String> = raw
        .into_iter()
        .map(|(domain, role)| (domain.trim().to_lowercase(), role.trim().to_string()))
        .collect();

    tracing::info!(
        path = %path.display(),
        count = mappings.len(),
        "Loaded domain role mappings"
    );

    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::complete_vars;
    use crate::config::AppConfig;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_role_mappings() {
        let file = write_temp(r#"{"Sub.Kosen-ac.jp": "role_123", "other.kosen-ac.jp": " 42 "}"#);
        let mappings = load_role_mappings(file.path()).unwrap();

        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings.get("sub.kosen-ac.jp").map(String::as_str), Some("role_123"));
        assert_eq!(mappings.get("other.kosen-ac.jp").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_malformed_mapping_file() {
        let file = write_temp(r#"["not", "an", "object"]"#);
        assert!(matches!(
            load_role_mappings(file.path()),
            Err(ConfigError::RoleMappingMalformed { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_mapping_file_is_fatal() {
        let mut vars = complete_vars();
        vars.insert(
            "ROLE_MAPPING_PATH".to_string(),
            "/definitely/not/here/roles.json".to_string(),
        );
        let result = AppConfig::from_lookup(|k| vars.get(k).cloned());
        assert!(matches!(result, Err(ConfigError::RoleMappingUnreadable { .. })));
    }

    #[test]
    fn test_mapping_from_explicit_path() {
        let file = write_temp(r#"{"sub.kosen-ac.jp": "555"}"#);
        let mut vars = complete_vars();
        vars.insert(
            "ROLE_MAPPING_PATH".to_string(),
            file.path().display().to_string(),
        );
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.verification.role_mappings.len(), 1);
    }

    #[test]
    fn test_code_ttl_must_be_positive() {
        let mut vars = complete_vars();
        vars.insert("VERIFY_CODE_TTL_MINUTES".to_string(), "0".to_string());
        let result = AppConfig::from_lookup(|k| vars.get(k).cloned());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        vars.insert("VERIFY_CODE_TTL_MINUTES".to_string(), "15".to_string());
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.verification.code_ttl_minutes, Some(15));
    }

    #[test]
    fn test_root_domain_normalized() {
        let mut vars = complete_vars();
        vars.insert("VERIFY_ROOT_DOMAIN".to_string(), ".Example.AC.jp".to_string());
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.verification.allowed_root_domain, "example.ac.jp");
        assert_eq!(config.verification.channel_delete_delay_secs, 10);
    }

    #[test]
    fn test_root_domain_must_not_be_empty() {
        for root in [".", "...", " . "] {
            let mut vars = complete_vars();
            vars.insert("VERIFY_ROOT_DOMAIN".to_string(), root.to_string());
            let result = AppConfig::from_lookup(|k| vars.get(k).cloned());
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { ref name, .. }) if name == "VERIFY_ROOT_DOMAIN"),
                "root {:?} should be rejected",
                root
            );
        }
    }
}
