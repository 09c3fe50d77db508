//! Static mapping from email domain to an additional role.

use std::collections::HashMap;

use super::identifiers::RoleId;

/// Email domain -> role granted on top of the base role
///
/// Loaded once at startup and read-only afterwards. Domains are matched
/// exactly (after lowercasing); a subdomain does not inherit its parent's role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainRoleMap {
    roles: HashMap<String, RoleId>,
}

impl DomainRoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the role for a domain
    pub fn with_role(mut self, domain: impl AsRef<str>, role: impl Into<RoleId>) -> Self {
        self.roles
            .insert(domain.as_ref().trim().to_lowercase(), role.into());
        self
    }

    /// Role mapped to `domain`, if any
    pub fn role_for_domain(&self, domain: &str) -> Option<&RoleId> {
        self.roles.get(&domain.to_lowercase())
    }

    /// Role mapped to the domain of `email`, if any
    pub fn role_for_email(&self, email: &str) -> Option<&RoleId> {
        kv_shared::email::split_email(email).and_then(|(_, domain)| self.role_for_domain(domain))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl From<HashMap<String, String>> for DomainRoleMap {
    fn from(raw: HashMap<String, String>) -> Self {
        raw.into_iter()
            .fold(Self::new(), |map, (domain, role)| map.with_role(domain, role))
    }
}
