//! Integration tests wiring the infrastructure notifier into the workflow

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kv_core::domain::value_objects::{DomainRoleMap, RoleId, SubjectId};
use kv_core::repositories::InMemoryVerificationStore;
use kv_core::services::{
    AuthorizationService, RoleServiceTrait, VerificationService, VerificationServiceConfig,
};
use kv_infra::mail::{create_mail_service, MailServiceAdapter};
use kv_shared::config::{MailConfig, MailProvider};

#[derive(Default)]
struct RecordingRoles {
    granted: Mutex<Vec<RoleId>>,
}

#[async_trait]
impl RoleServiceTrait for RecordingRoles {
    async fn grant_role(&self, _subject: &SubjectId, role: &RoleId) -> Result<(), String> {
        self.granted.lock().unwrap().push(role.clone());
        Ok(())
    }
}

fn mock_config() -> MailConfig {
    MailConfig {
        provider: MailProvider::Mock,
        sender_address: "bot@example.org".to_string(),
        app_password: String::new(),
        relay_host: "localhost".to_string(),
        relay_port: 25,
        subject: "Discord Verification Code".to_string(),
    }
}

#[tokio::test]
async fn test_complete_mail_workflow() {
    let mail = MailServiceAdapter::new(create_mail_service(&mock_config()).unwrap());
    assert_eq!(mail.provider_name(), "Mock");

    let roles = Arc::new(RecordingRoles::default());
    let authorization = Arc::new(AuthorizationService::new(
        roles.clone(),
        RoleId::from("900"),
        DomainRoleMap::new().with_role("sub.kosen-ac.jp", "901"),
    ));
    let service = VerificationService::new(
        Arc::new(mail),
        Arc::new(InMemoryVerificationStore::new()),
        authorization,
        VerificationServiceConfig::default(),
    );
    let subject = SubjectId::from(77u64);

    let started = service
        .start(&subject, "alice@sub.kosen-ac.jp")
        .await
        .unwrap();
    assert!(started.delivery_id.starts_with("mock_"));

    let code = service.pending(&subject).await.unwrap().code;
    service.confirm(&subject, &code).await.unwrap();

    assert_eq!(
        roles.granted.lock().unwrap().as_slice(),
        &[RoleId::from("900"), RoleId::from("901")]
    );
}
