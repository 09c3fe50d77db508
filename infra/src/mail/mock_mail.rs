//! Mock mail service printing to the console

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kv_shared::email::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Development mail service; the code is printed instead of sent
pub struct MockMailService {
    counter: AtomicUsize,
    simulate_failure: bool,
    quiet: bool,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// `quiet` suppresses console output (tests)
    pub fn with_options(simulate_failure: bool, quiet: bool) -> Self {
        Self {
            counter: AtomicUsize::new(0),
            simulate_failure,
            quiet,
        }
    }

    pub fn set_simulate_failure(&mut self, simulate_failure: bool) {
        self.simulate_failure = simulate_failure;
    }

    pub fn get_message_count(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.counter.store(0, Ordering::SeqCst);
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        if self.simulate_failure {
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }
        if !to.contains('@') {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient: {}",
                mask_email(to)
            )));
        }

        let count = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock_{}", count);

        if !self.quiet {
            println!("========== MOCK MAIL ==========");
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!();
            println!("{}", body.trim_end());
            println!("===============================");
        }

        tracing::info!(
            recipient = %mask_email(to),
            message_id = %message_id,
            event = "mock_mail_sent",
            "Mock mail delivered to console"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
