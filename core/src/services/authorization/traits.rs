//! Traits for role grant integration

use async_trait::async_trait;

use crate::domain::value_objects::{RoleId, SubjectId};

/// Trait for the chat platform's role management
#[async_trait]
pub trait RoleServiceTrait: Send + Sync {
    /// Grant `role` to `subject`
    async fn grant_role(&self, subject: &SubjectId, role: &RoleId) -> Result<(), String>;
}
