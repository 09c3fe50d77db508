//! Main verification service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use kv_shared::email::mask_email;

use crate::domain::entities::{PendingVerification, CODE_LENGTH};
use crate::domain::value_objects::SubjectId;
use crate::errors::{DomainResult, TransportError, VerificationError};
use crate::repositories::VerificationStore;
use crate::services::authorization::{AuthorizationService, RoleServiceTrait};

use super::code_generator::{CodeGenerator, SecureCodeGenerator};
use super::config::VerificationServiceConfig;
use super::domain_validator::DomainValidator;
use super::traits::MailServiceTrait;
use super::types::{ConfirmResult, StartResult};

/// Verification workflow: issue a code by mail, confirm it, grant roles
///
/// Per subject the state moves `NoRecord -> Pending -> (Verified | NoRecord)`.
/// Starting again while pending overwrites the record, so only the newest
/// code is accepted.
pub struct VerificationService<M, S, R>
where
    M: MailServiceTrait,
    S: VerificationStore,
    R: RoleServiceTrait,
{
    /// Notifier delivering codes
    mail_service: Arc<M>,
    /// Pending verification records
    store: Arc<S>,
    /// Role grants applied on confirmation
    authorization: Arc<AuthorizationService<R>>,
    validator: DomainValidator,
    code_generator: Arc<dyn CodeGenerator>,
    config: VerificationServiceConfig,
}

impl<M, S, R> VerificationService<M, S, R>
where
    M: MailServiceTrait,
    S: VerificationStore,
    R: RoleServiceTrait,
{
    /// Create a new verification service using the OS random source for codes
    pub fn new(
        mail_service: Arc<M>,
        store: Arc<S>,
        authorization: Arc<AuthorizationService<R>>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            mail_service,
            store,
            authorization,
            validator: DomainValidator::new(config.allowed_root_domain.clone()),
            code_generator: Arc::new(SecureCodeGenerator),
            config,
        }
    }

    /// Replace the code generator
    pub fn with_code_generator(mut self, code_generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    /// Start (or restart) verification of `email` for `subject`
    ///
    /// This method:
    /// 1. Validates the email domain against the allow-list
    /// 2. Generates a new code
    /// 3. Stores it, replacing any earlier pending code of the subject
    /// 4. Mails the code
    ///
    /// When mailing fails the record stays stored; the subject has to start
    /// again to get a fresh code delivered.
    pub async fn start(&self, subject: &SubjectId, email: &str) -> DomainResult<StartResult> {
        let email = email.trim();
        let masked = mask_email(email);

        if let Err(err) = self.validator.validate_email(email) {
            tracing::warn!(
                subject = %subject,
                email = %masked,
                error = %err,
                event = "email_rejected",
                "Rejected verification request"
            );
            return Err(err.into());
        }

        let code = self.code_generator.generate().map_err(|e| {
            tracing::error!(
                subject = %subject,
                error = %e,
                event = "code_generation_failed",
                "Failed to generate verification code"
            );
            e
        })?;

        let record = match self.config.code_ttl_minutes {
            Some(ttl) => PendingVerification::new_with_expiration(
                subject.clone(),
                code.clone(),
                email.to_string(),
                ttl,
            ),
            None => PendingVerification::new(subject.clone(), code.clone(), email.to_string()),
        };
        let verification_id = record.id;
        let expires_at = record.expires_at;

        self.store.put(record).await;

        tracing::info!(
            subject = %subject,
            email = %masked,
            session_id = %verification_id,
            event = "code_issued",
            "Issued verification code"
        );

        let delivery_id = self
            .mail_service
            .send_verification_code(email, &code)
            .await
            .map_err(|reason| {
                tracing::error!(
                    subject = %subject,
                    email = %masked,
                    error = %reason,
                    event = "mail_delivery_failed",
                    "Failed to send verification mail"
                );
                TransportError::MailDelivery { reason }
            })?;

        Ok(StartResult {
            verification_id,
            masked_email: masked,
            delivery_id,
            expires_at,
        })
    }

    /// Confirm a submitted code for `subject`
    ///
    /// On a match the base role (and mapped domain role, best effort) is
    /// granted and the pending record is deleted. Any failure before the base
    /// role is granted leaves the record in place so the subject can retry.
    pub async fn confirm(&self, subject: &SubjectId, code: &str) -> DomainResult<ConfirmResult> {
        let code = code.trim();
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                subject = %subject,
                code_length = code.len(),
                event = "invalid_code_format",
                "Invalid verification code format provided"
            );
            return Err(VerificationError::InvalidCodeFormat {
                expected: CODE_LENGTH,
            }
            .into());
        }

        let record = match self.store.get(subject).await {
            Some(record) => record,
            None => {
                tracing::warn!(
                    subject = %subject,
                    event = "no_pending_verification",
                    "Code submitted without a pending verification"
                );
                return Err(VerificationError::NoPendingVerification.into());
            }
        };

        if record.is_expired() {
            self.store.remove(subject).await;
            tracing::warn!(
                subject = %subject,
                session_id = %record.id,
                event = "code_expired",
                "Expired verification code submitted"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if !constant_time_eq(record.code.as_bytes(), code.as_bytes()) {
            tracing::warn!(
                subject = %subject,
                session_id = %record.id,
                event = "code_mismatch",
                "Verification code did not match"
            );
            return Err(VerificationError::CodeMismatch.into());
        }

        let authorization = self.authorization.apply(subject, &record.email).await?;

        self.store.remove(subject).await;

        tracing::info!(
            subject = %subject,
            email = %mask_email(&record.email),
            session_id = %record.id,
            event = "verification_succeeded",
            "Subject verified"
        );

        Ok(ConfirmResult {
            verification_id: record.id,
            email: record.email,
            authorization,
        })
    }

    /// Current pending record of a subject
    pub async fn pending(&self, subject: &SubjectId) -> Option<PendingVerification> {
        self.store.get(subject).await
    }
}
