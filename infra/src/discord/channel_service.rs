//! Private onboarding channels on Discord

use std::sync::Arc;

use async_trait::async_trait;
use kv_core::domain::value_objects::{ChannelId, SubjectId};
use kv_core::services::onboarding::ChannelServiceTrait;
use serenity::builder::{CreateChannel, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::http::Http;
use serenity::model::channel::{ChannelType, PermissionOverwrite, PermissionOverwriteType};
use serenity::model::id::{self as discord_id, GuildId, UserId};
use serenity::model::permissions::Permissions;
use tracing::info;

use super::ids;

/// Embed accent colour (Discord blurple)
pub const EMBED_COLOUR: u32 = 0x5865F2;

/// Channel name for a subject's onboarding channel
pub fn private_channel_name(display_name: &str) -> String {
    format!("認証-{}", display_name)
}

/// Instructions posted into a freshly created onboarding channel
pub fn instructions_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("ようこそ! ")
        .description(
            "このチャンネルはボットとあなた専用のプライベートチャンネルです.\n手順に従って認証を完了させてください.",
        )
        .field(
            "Step 1: Emailの登録",
            "`/verify`コマンドを使って高専のMicrosoftアドレスを入力してください",
            false,
        )
        .field(
            "Step 2: 認証コードの入力",
            "`/code` コマンドを使って送信された認証コードを入力してください.",
            false,
        )
        .footer(CreateEmbedFooter::new(
            "This channel will be deleted automatically upon successful verification.",
        ))
        .colour(EMBED_COLOUR)
}

/// Creates, fills and deletes onboarding channels
pub struct DiscordChannelService {
    http: Arc<Http>,
    guild_id: GuildId,
    bot_user_id: UserId,
    category_id: Option<discord_id::ChannelId>,
}

impl DiscordChannelService {
    pub fn new(
        http: Arc<Http>,
        guild_id: GuildId,
        bot_user_id: UserId,
        category_id: Option<discord_id::ChannelId>,
    ) -> Self {
        Self {
            http,
            guild_id,
            bot_user_id,
            category_id,
        }
    }

    /// Overwrites hiding the channel from everyone but the subject and the bot
    fn overwrites(&self, subject: UserId) -> Vec<PermissionOverwrite> {
        // @everyone shares the guild's id
        let everyone = discord_id::RoleId::new(self.guild_id.get());
        vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(everyone),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(subject),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(self.bot_user_id),
            },
        ]
    }
}

#[async_trait]
impl ChannelServiceTrait for DiscordChannelService {
    async fn create_private_channel(
        &self,
        subject: &SubjectId,
        display_name: &str,
    ) -> Result<ChannelId, String> {
        let user = ids::user_id(subject).map_err(|e| e.to_string())?;
        let name = private_channel_name(display_name);

        let mut builder = CreateChannel::new(name.as_str())
            .kind(ChannelType::Text)
            .permissions(self.overwrites(user));
        if let Some(category) = self.category_id {
            builder = builder.category(category);
        }

        let channel = self
            .guild_id
            .create_channel(&*self.http, builder)
            .await
            .map_err(|e| e.to_string())?;

        info!(
            subject = %subject,
            channel = %channel.id,
            name = %name,
            "Created private channel"
        );

        Ok(ChannelId::from(channel.id.get()))
    }

    async fn post_instructions(&self, channel: &ChannelId) -> Result<(), String> {
        let channel_id = ids::channel_id(channel).map_err(|e| e.to_string())?;
        channel_id
            .send_message(&*self.http, CreateMessage::new().embed(instructions_embed()))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_channel(&self, channel: &ChannelId) -> Result<(), String> {
        let channel_id = ids::channel_id(channel).map_err(|e| e.to_string())?;
        channel_id
            .delete(&*self.http)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> DiscordChannelService {
        DiscordChannelService::new(
            Arc::new(Http::new("token")),
            GuildId::new(1000),
            UserId::new(2000),
            None,
        )
    }

    #[test]
    fn test_channel_name() {
        assert_eq!(private_channel_name("alice"), "認証-alice");
    }

    #[test]
    fn test_overwrites_hide_channel_from_everyone() {
        let overwrites = service().overwrites(UserId::new(3000));
        assert_eq!(overwrites.len(), 3);

        let everyone = &overwrites[0];
        assert_eq!(
            everyone.kind,
            PermissionOverwriteType::Role(discord_id::RoleId::new(1000))
        );
        assert!(everyone.deny.contains(Permissions::VIEW_CHANNEL));

        let subject = &overwrites[1];
        assert_eq!(subject.kind, PermissionOverwriteType::Member(UserId::new(3000)));
        assert_eq!(subject.allow, Permissions::VIEW_CHANNEL);

        let bot = &overwrites[2];
        assert_eq!(bot.kind, PermissionOverwriteType::Member(UserId::new(2000)));
        assert!(bot.allow.contains(Permissions::SEND_MESSAGES));
    }

    #[tokio::test]
    async fn test_invalid_subject_is_rejected_before_any_request() {
        let result = service()
            .create_private_channel(&SubjectId::from("not-a-snowflake"), "alice")
            .await;
        assert!(result.unwrap_err().contains("Invalid Discord id"));
    }
}
