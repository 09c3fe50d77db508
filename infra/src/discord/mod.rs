//! Discord REST adapters
//!
//! Implement the core role and channel traits on top of a shared
//! `serenity` HTTP client. Domain identifiers are opaque strings; they are
//! parsed into snowflakes here, at the edge.

pub mod channel_service;
pub mod ids;
pub mod role_service;

pub use channel_service::{instructions_embed, private_channel_name, DiscordChannelService};
pub use ids::{channel_id, role_id, user_id};
pub use role_service::DiscordRoleService;
