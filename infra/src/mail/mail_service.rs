//! Mail service trait shared by all providers

use async_trait::async_trait;
use kv_shared::config::mail::DEFAULT_SUBJECT;

use crate::InfrastructureError;

/// Plain-text body of the verification mail
pub fn verification_body(code: &str) -> String {
    format!(
        "あなたの認証コードは: {code} です.\r\nYour verification code is: {code}\r\n",
        code = code
    )
}

/// A provider able to deliver a plain-text mail
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a mail, returning a provider-specific delivery id
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Subject line used for verification mails
    fn verification_subject(&self) -> &str {
        DEFAULT_SUBJECT
    }

    /// Send a verification code
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        let body = verification_body(code);
        self.send_mail(to, self.verification_subject(), &body).await
    }

    fn provider_name(&self) -> &str;
}
