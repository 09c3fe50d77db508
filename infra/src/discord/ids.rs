//! Conversion of opaque domain identifiers into Discord snowflakes

use std::num::NonZeroU64;

use kv_core::domain::value_objects::{ChannelId, RoleId, SubjectId};
use serenity::model::id;

use crate::InfrastructureError;

fn snowflake(raw: &str) -> Result<NonZeroU64, InfrastructureError> {
    raw.trim()
        .parse::<NonZeroU64>()
        .map_err(|_| InfrastructureError::InvalidId(raw.to_string()))
}

pub fn user_id(subject: &SubjectId) -> Result<id::UserId, InfrastructureError> {
    snowflake(subject.as_str()).map(id::UserId::from)
}

pub fn role_id(role: &RoleId) -> Result<id::RoleId, InfrastructureError> {
    snowflake(role.as_str()).map(id::RoleId::from)
}

pub fn channel_id(channel: &ChannelId) -> Result<id::ChannelId, InfrastructureError> {
    snowflake(channel.as_str()).map(id::ChannelId::from)
}
