//! SMTP Mail Service Implementation
//!
//! Submits mail through an authenticated relay (Gmail by default) upgraded
//! with STARTTLS. Each mail is a single attempt; a failed send is reported to
//! the caller, who asks the user to start over.

use std::time::Duration;

use async_trait::async_trait;
use kv_shared::config::MailConfig;
use kv_shared::email::{mask_email, split_email};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Upper bound for one SMTP conversation
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP mail service implementation
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    sender_domain: String,
    subject: String,
    relay: String,
}

impl SmtpMailService {
    /// Create a new SMTP mail service
    ///
    /// No connection is opened here; the relay is contacted on first send.
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let sender: Mailbox = config.sender_address.parse()?;
        let sender_domain = split_email(&config.sender_address)
            .map(|(_, domain)| domain.to_string())
            .ok_or_else(|| {
                InfrastructureError::Config(format!(
                    "Sender address has no domain: {}",
                    config.sender_address
                ))
            })?;

        let credentials = Credentials::new(
            config.sender_address.clone(),
            config.app_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.relay_host)?
            .port(config.relay_port)
            .credentials(credentials)
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        info!(
            relay = %config.relay_address(),
            sender = %mask_email(&config.sender_address),
            "SMTP mail service initialized"
        );

        Ok(Self {
            transport,
            sender,
            sender_domain,
            subject: config.subject.clone(),
            relay: config.relay_address(),
        })
    }

    /// Assemble the message; returns it with its Message-ID
    fn build_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(Message, String), InfrastructureError> {
        let recipient: Mailbox = to.parse()?;
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.sender_domain);

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        Ok((message, message_id))
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let (message, message_id) = self.build_message(to, subject, body)?;

        match self.transport.send(message).await {
            Ok(response) => {
                info!(
                    recipient = %mask_email(to),
                    message_id = %message_id,
                    smtp_code = %response.code(),
                    event = "mail_sent",
                    "Mail accepted by relay"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    recipient = %mask_email(to),
                    relay = %self.relay,
                    error = %e,
                    event = "smtp_send_failed",
                    "SMTP relay did not accept the mail"
                );
                Err(e.into())
            }
        }
    }

    fn verification_subject(&self) -> &str {
        &self.subject
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kv_shared::config::MailProvider;

    fn config() -> MailConfig {
        MailConfig {
            provider: MailProvider::Smtp,
            sender_address: "bot@example.org".to_string(),
            app_password: "app-password".to_string(),
            relay_host: "smtp.example.org".to_string(),
            relay_port: 587,
            subject: "Discord Verification Code".to_string(),
        }
    }

    #[tokio::test]
    async fn test_build_message_headers() {
        let service = SmtpMailService::new(&config()).unwrap();
        let (message, message_id) = service
            .build_message("alice@kosen-ac.jp", "Discord Verification Code", "body")
            .unwrap();

        assert!(message_id.ends_with("@example.org>"));
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: alice@kosen-ac.jp"));
        assert!(raw.contains("Subject: Discord Verification Code"));
        assert!(raw.contains(&message_id));
    }

    #[tokio::test]
    async fn test_invalid_recipient_rejected() {
        let service = SmtpMailService::new(&config()).unwrap();
        let result = service.build_message("not-an-address", "s", "b");
        assert!(matches!(result, Err(InfrastructureError::Address(_))));
    }

    #[test]
    fn test_subject_from_config() {
        let mut config = config();
        config.subject = "Kosen verify".to_string();
        let service = SmtpMailService::new(&config).unwrap();
        assert_eq!(service.verification_subject(), "Kosen verify");
        assert_eq!(service.provider_name(), "SMTP");
    }
}
