use std::sync::Arc;

use async_trait::async_trait;
use kv_core::domain::value_objects::{RoleId, SubjectId};
use kv_core::services::authorization::RoleServiceTrait;
use serenity::http::Http;
use serenity::model::id::GuildId;
use tracing::{debug, error};

use super::ids;

/// Audit log reason attached to every grant
const GRANT_REASON: &str = "Email verification completed";

/// Grants guild roles through the Discord REST API
pub struct DiscordRoleService {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordRoleService {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl RoleServiceTrait for DiscordRoleService {
    async fn grant_role(&self, subject: &SubjectId, role: &RoleId) -> Result<(), String> {
        let user = ids::user_id(subject).map_err(|e| e.to_string())?;
        let role_id = ids::role_id(role).map_err(|e| e.to_string())?;

        debug!(subject = %subject, role = %role, "Granting role");

        self.http
            .add_member_role(self.guild_id, user, role_id, Some(GRANT_REASON))
            .await
            .map_err(|e| {
                error!(
                    subject = %subject,
                    role = %role,
                    error = %e,
                    event = "discord_role_grant_failed",
                    "Discord rejected role grant"
                );
                e.to_string()
            })
    }
}
