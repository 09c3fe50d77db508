//! Traits for mail delivery integration

use async_trait::async_trait;

/// Trait for the notifier that delivers verification codes
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send a verification code to an email address
    ///
    /// Returns a provider-specific delivery identifier. A single attempt is
    /// made; retrying is up to the user.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}
