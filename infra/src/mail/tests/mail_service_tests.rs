//! Tests for the mail service trait, adapter and factory

use std::sync::Mutex;

use async_trait::async_trait;
use kv_core::services::verification::MailServiceTrait;
use kv_shared::config::{MailConfig, MailProvider};

use crate::mail::{create_mail_service, verification_body, MailService, MailServiceAdapter};
use crate::InfrastructureError;

/// Captures the last mail instead of sending it
#[derive(Default)]
struct CapturingMail {
    last: Mutex<Option<(String, String, String)>>,
}

#[async_trait]
impl MailService for CapturingMail {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        *self.last.lock().unwrap() = Some((to.to_string(), subject.to_string(), body.to_string()));
        Ok("captured".to_string())
    }

    fn provider_name(&self) -> &str {
        "Capturing"
    }
}

fn mail_config(provider: MailProvider) -> MailConfig {
    MailConfig {
        provider,
        sender_address: "bot@example.org".to_string(),
        app_password: "secret".to_string(),
        relay_host: "smtp.example.org".to_string(),
        relay_port: 587,
        subject: "Discord Verification Code".to_string(),
    }
}

#[test]
fn test_verification_body_contains_code() {
    let body = verification_body("482913");
    assert!(body.contains("あなたの認証コードは: 482913 です."));
    assert!(body.contains("Your verification code is: 482913"));
}

#[tokio::test]
async fn test_default_verification_mail() {
    let service = CapturingMail::default();
    service
        .send_verification_code("alice@kosen-ac.jp", "482913")
        .await
        .unwrap();

    let (to, subject, body) = service.last.lock().unwrap().clone().unwrap();
    assert_eq!(to, "alice@kosen-ac.jp");
    assert_eq!(subject, "Discord Verification Code");
    assert_eq!(body, verification_body("482913"));
}

#[tokio::test]
async fn test_adapter_maps_errors_to_strings() {
    let adapter = MailServiceAdapter::new(Box::new(crate::mail::MockMailService::with_options(
        true, true,
    )));

    let err = adapter
        .send_verification_code("alice@kosen-ac.jp", "123456")
        .await
        .unwrap_err();
    assert!(err.contains("Simulated mail delivery failure"));
}

#[tokio::test]
async fn test_factory_selects_provider() {
    let mock = create_mail_service(&mail_config(MailProvider::Mock)).unwrap();
    assert_eq!(mock.provider_name(), "Mock");

    let smtp = create_mail_service(&mail_config(MailProvider::Smtp)).unwrap();
    assert_eq!(smtp.provider_name(), "SMTP");
}
