//! Mail Service Trait Adapter
//!
//! Bridges any infrastructure `MailService` to the core `MailServiceTrait`
//! consumed by the verification workflow.

use std::sync::Arc;

use async_trait::async_trait;
use kv_core::services::verification::MailServiceTrait;

use super::mail_service::MailService;

/// Adapter that implements the core MailServiceTrait for a boxed provider
#[derive(Clone)]
pub struct MailServiceAdapter {
    inner: Arc<dyn MailService>,
}

impl MailServiceAdapter {
    pub fn new(inner: Box<dyn MailService>) -> Self {
        Self {
            inner: Arc::from(inner),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl MailServiceTrait for MailServiceAdapter {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(email, code)
            .await
            .map_err(|e| e.to_string())
    }
}
