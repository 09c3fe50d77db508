//! Mock collaborators shared by the service tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::value_objects::{ChannelId, RoleId, SubjectId};
use crate::errors::{DomainError, DomainResult};
use crate::services::authorization::RoleServiceTrait;
use crate::services::onboarding::ChannelServiceTrait;
use crate::services::verification::{CodeGenerator, MailServiceTrait};

/// Records every mail instead of sending it
pub struct MockMailService {
    pub sent: Mutex<Vec<(String, String)>>,
    pub should_fail: bool,
}

impl MockMailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    /// Most recent code sent to `email`
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("SMTP relay rejected the message".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((email.to_string(), code.to_string()));
        Ok(format!("mock-mail-{}", sent.len()))
    }
}

/// Records role grants; can be told to fail for one role
pub struct MockRoleService {
    granted: Mutex<Vec<(SubjectId, RoleId)>>,
    attempts: AtomicUsize,
    fail_role: Option<RoleId>,
}

impl MockRoleService {
    pub fn new() -> Self {
        Self {
            granted: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail_role: None,
        }
    }

    pub fn failing_for(role: &str) -> Self {
        Self {
            fail_role: Some(RoleId::from(role)),
            ..Self::new()
        }
    }

    pub fn granted(&self) -> Vec<(SubjectId, RoleId)> {
        self.granted.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleServiceTrait for MockRoleService {
    async fn grant_role(&self, subject: &SubjectId, role: &RoleId) -> Result<(), String> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_role.as_ref() == Some(role) {
            return Err(format!("Missing Permissions for role {}", role));
        }
        self.granted
            .lock()
            .unwrap()
            .push((subject.clone(), role.clone()));
        Ok(())
    }
}

/// Records channel operations
pub struct MockChannelService {
    pub created: Mutex<Vec<(SubjectId, String, ChannelId)>>,
    pub instructed: Mutex<Vec<ChannelId>>,
    pub deleted: Mutex<Vec<ChannelId>>,
    pub fail_create: bool,
    pub fail_instructions: bool,
    next_id: AtomicUsize,
}

impl MockChannelService {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            instructed: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_create: false,
            fail_instructions: false,
            next_id: AtomicUsize::new(100),
        }
    }

    pub fn deleted(&self) -> Vec<ChannelId> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelServiceTrait for MockChannelService {
    async fn create_private_channel(
        &self,
        subject: &SubjectId,
        display_name: &str,
    ) -> Result<ChannelId, String> {
        if self.fail_create {
            return Err("Missing Permissions".to_string());
        }
        let id = ChannelId::from(self.next_id.fetch_add(1, Ordering::SeqCst) as u64);
        self.created
            .lock()
            .unwrap()
            .push((subject.clone(), display_name.to_string(), id.clone()));
        Ok(id)
    }

    async fn post_instructions(&self, channel: &ChannelId) -> Result<(), String> {
        if self.fail_instructions {
            return Err("Cannot send messages in this channel".to_string());
        }
        self.instructed.lock().unwrap().push(channel.clone());
        Ok(())
    }

    async fn delete_channel(&self, channel: &ChannelId) -> Result<(), String> {
        self.deleted.lock().unwrap().push(channel.clone());
        Ok(())
    }
}

/// Hands out a fixed sequence of codes
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> DomainResult<String> {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DomainError::RandomSource {
                message: "code sequence exhausted".to_string(),
            })
    }
}
