//! Error types for the verification workflow and its collaborators

use thiserror::Error;

/// Input problems; reported to the user, never change state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Invalid email address format")]
    InvalidEmailFormat,

    #[error("Email domain {domain} is not {root} or one of its subdomains")]
    DomainNotAllowed { domain: String, root: String },

    #[error("Verification code must be {expected} digits")]
    InvalidCodeFormat { expected: usize },

    #[error("No pending verification for this user")]
    NoPendingVerification,

    #[error("Invalid verification code")]
    CodeMismatch,

    #[error("Verification code expired")]
    CodeExpired,
}

impl VerificationError {
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            VerificationError::DomainNotAllowed { .. } => "DOMAIN_NOT_ALLOWED",
            VerificationError::InvalidCodeFormat { .. } => "INVALID_CODE_FORMAT",
            VerificationError::NoPendingVerification => "NO_PENDING_VERIFICATION",
            VerificationError::CodeMismatch => "CODE_MISMATCH",
            VerificationError::CodeExpired => "CODE_EXPIRED",
        }
    }
}

/// Failures of the mail relay or the chat platform
///
/// The triggering operation is aborted and reported; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Failed to deliver verification mail: {reason}")]
    MailDelivery { reason: String },

    #[error("Failed to grant role {role}: {reason}")]
    RoleGrant { role: String, reason: String },

    #[error("Channel operation failed: {reason}")]
    Channel { reason: String },
}

impl TransportError {
    pub fn code(&self) -> &'static str {
        match self {
            TransportError::MailDelivery { .. } => "MAIL_DELIVERY_FAILED",
            TransportError::RoleGrant { .. } => "ROLE_GRANT_FAILED",
            TransportError::Channel { .. } => "CHANNEL_FAILED",
        }
    }
}
