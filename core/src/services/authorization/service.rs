//! Role grant rules applied after a successful confirmation

use std::sync::Arc;

use crate::domain::value_objects::{DomainRoleMap, RoleId, SubjectId};
use crate::errors::{DomainResult, TransportError};

use super::traits::RoleServiceTrait;

/// What happened to the domain-specific role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainRoleOutcome {
    /// No mapping exists for the email's domain
    NotMapped,
    /// The mapped role was granted
    Granted(RoleId),
    /// The mapped role could not be granted; the base role still stands
    Failed { role: RoleId, reason: String },
}

/// Roles granted to a verified subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationOutcome {
    pub base_role: RoleId,
    pub domain_role: DomainRoleOutcome,
}

/// Grants the base role, then the domain-specific role on a best-effort basis
pub struct AuthorizationService<R: RoleServiceTrait> {
    role_service: Arc<R>,
    base_role: RoleId,
    domain_roles: DomainRoleMap,
}

impl<R: RoleServiceTrait> AuthorizationService<R> {
    pub fn new(role_service: Arc<R>, base_role: RoleId, domain_roles: DomainRoleMap) -> Self {
        Self {
            role_service,
            base_role,
            domain_roles,
        }
    }

    /// Apply role grants for a subject who proved ownership of `email`
    ///
    /// A failed base grant aborts with [`TransportError::RoleGrant`]. A failed
    /// domain grant is logged and reported in the outcome, never as an error.
    pub async fn apply(&self, subject: &SubjectId, email: &str) -> DomainResult<AuthorizationOutcome> {
        self.role_service
            .grant_role(subject, &self.base_role)
            .await
            .map_err(|reason| {
                tracing::error!(
                    subject = %subject,
                    role = %self.base_role,
                    error = %reason,
                    event = "base_role_grant_failed",
                    "Failed to grant base role"
                );
                TransportError::RoleGrant {
                    role: self.base_role.to_string(),
                    reason,
                }
            })?;

        tracing::info!(
            subject = %subject,
            role = %self.base_role,
            event = "base_role_granted",
            "Granted base role"
        );

        let domain_role = match self.domain_roles.role_for_email(email) {
            None => {
                tracing::info!(
                    subject = %subject,
                    email = %kv_shared::email::mask_email(email),
                    "No role mapping found for domain"
                );
                DomainRoleOutcome::NotMapped
            }
            Some(role) => match self.role_service.grant_role(subject, role).await {
                Ok(()) => {
                    tracing::info!(
                        subject = %subject,
                        role = %role,
                        event = "domain_role_granted",
                        "Granted domain role"
                    );
                    DomainRoleOutcome::Granted(role.clone())
                }
                Err(reason) => {
                    tracing::warn!(
                        subject = %subject,
                        role = %role,
                        error = %reason,
                        event = "domain_role_grant_failed",
                        "Failed to grant domain role, base role kept"
                    );
                    DomainRoleOutcome::Failed {
                        role: role.clone(),
                        reason,
                    }
                }
            },
        };

        Ok(AuthorizationOutcome {
            base_role: self.base_role.clone(),
            domain_role,
        })
    }
}
