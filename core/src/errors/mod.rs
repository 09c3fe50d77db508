//! Domain-specific error types and error handling.

mod types;

pub use types::{TransportError, VerificationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Random source unavailable: {message}")]
    RandomSource { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DomainError {
    /// Stable error code, used by the presentation layer to pick a
    /// localized message
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::RandomSource { .. } => "INTERNAL_ERROR",
            DomainError::Verification(err) => err.code(),
            DomainError::Transport(err) => err.code(),
        }
    }

    /// Whether the user caused the failure (bad input) rather than a
    /// collaborator or the bot itself
    pub fn is_user_error(&self) -> bool {
        matches!(self, DomainError::Verification(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
