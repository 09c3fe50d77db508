//! Mail Service Module
//!
//! Delivers verification codes by email. The SMTP implementation submits
//! through an authenticated relay with STARTTLS; the mock implementation
//! prints to the console for development.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all providers
//! - **Mock Implementation**: Console output for development
//! - **SMTP Support**: Production delivery via `lettre`
//! - **Security**: Recipient masking in logs

pub mod mail_service;
pub mod mail_trait_adapter;
pub mod mock_mail;

// SMTP mail service (feature-gated)
#[cfg(feature = "smtp-mail")]
pub mod smtp;

// Re-export commonly used types
pub use mail_service::{verification_body, MailService};
pub use mail_trait_adapter::MailServiceAdapter;
pub use mock_mail::MockMailService;

#[cfg(feature = "smtp-mail")]
pub use smtp::SmtpMailService;

#[cfg(test)]
mod tests;

use kv_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

/// Create a mail service based on configuration
///
/// Unlike a missing optional integration, a misconfigured SMTP relay is
/// returned as an error so startup fails instead of silently dropping codes.
pub fn create_mail_service(config: &MailConfig) -> Result<Box<dyn MailService>, InfrastructureError> {
    match config.provider {
        MailProvider::Mock => {
            tracing::warn!("Using mock mail service, codes are printed to the console");
            Ok(Box::new(MockMailService::new()))
        }
        #[cfg(feature = "smtp-mail")]
        MailProvider::Smtp => Ok(Box::new(SmtpMailService::new(config)?)),
        #[cfg(not(feature = "smtp-mail"))]
        MailProvider::Smtp => Err(InfrastructureError::Config(
            "SMTP provider requires the smtp-mail feature".to_string(),
        )),
    }
}
