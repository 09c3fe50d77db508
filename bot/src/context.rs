//! Services shared by all event handlers

use std::num::NonZeroU64;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use kv_core::domain::value_objects::{DomainRoleMap, RoleId};
use kv_core::repositories::InMemoryVerificationStore;
use kv_core::services::{
    AuthorizationService, OnboardingService, VerificationService, VerificationServiceConfig,
};
use kv_infra::discord::{DiscordChannelService, DiscordRoleService};
use kv_infra::mail::{create_mail_service, MailServiceAdapter};
use kv_shared::AppConfig;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId};

pub type Verification =
    VerificationService<MailServiceAdapter, InMemoryVerificationStore, DiscordRoleService>;
pub type Onboarding = OnboardingService<DiscordChannelService>;

/// Everything a handler needs, built once at startup
pub struct AppContext {
    pub verification: Arc<Verification>,
    pub onboarding: Arc<Onboarding>,
    pub guild_id: GuildId,
    pub welcome_channel_id: ChannelId,
}

fn guild_snowflake(name: &str, value: u64) -> anyhow::Result<NonZeroU64> {
    NonZeroU64::new(value).with_context(|| format!("{} must be a non-zero snowflake", name))
}

/// Build the domain role map, rejecting role ids that are not snowflakes
pub fn domain_roles(config: &AppConfig) -> anyhow::Result<DomainRoleMap> {
    for (domain, role) in &config.verification.role_mappings {
        role.parse::<NonZeroU64>().with_context(|| {
            format!(
                "role mapping for {} has invalid role id {:?}",
                domain, role
            )
        })?;
    }
    Ok(DomainRoleMap::from(config.verification.role_mappings.clone()))
}

impl AppContext {
    /// Wire infrastructure adapters into the workflow services
    pub async fn build(config: &AppConfig, http: Arc<Http>) -> anyhow::Result<Self> {
        let guild_id = GuildId::from(guild_snowflake("DISCORD_GUILD_ID", config.discord.guild_id)?);
        let welcome_channel_id = ChannelId::from(guild_snowflake(
            "DISCORD_WELCOME_CHANNEL_ID",
            config.discord.welcome_channel_id,
        )?);
        let category_id = match config.discord.private_category_id {
            Some(id) => Some(ChannelId::from(guild_snowflake(
                "DISCORD_PRIVATE_CATEGORY_ID",
                id,
            )?)),
            None => None,
        };

        let bot_user = http
            .get_current_user()
            .await
            .context("failed to fetch the bot user")?;

        let mail = create_mail_service(&config.mail).context("failed to set up mail delivery")?;
        let mail = Arc::new(MailServiceAdapter::new(mail));
        tracing::info!(provider = mail.provider_name(), "Mail service ready");

        let roles = Arc::new(DiscordRoleService::new(http.clone(), guild_id));
        let domain_roles = domain_roles(config)?;
        tracing::info!(
            path = %config.verification.role_mapping_path.display(),
            mapped_domains = domain_roles.len(),
            "Domain role map loaded"
        );

        let authorization = Arc::new(AuthorizationService::new(
            roles,
            RoleId::from(config.discord.verified_role_id),
            domain_roles,
        ));

        let verification = VerificationService::new(
            mail,
            Arc::new(InMemoryVerificationStore::new()),
            authorization,
            VerificationServiceConfig::from(&config.verification),
        );

        let channels = Arc::new(DiscordChannelService::new(
            http,
            guild_id,
            bot_user.id,
            category_id,
        ));
        let onboarding = OnboardingService::new(
            channels,
            Duration::from_secs(config.verification.channel_delete_delay_secs),
        );

        Ok(Self {
            verification: Arc::new(verification),
            onboarding: Arc::new(onboarding),
            guild_id,
            welcome_channel_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(mappings: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = [
            ("DISCORD_BOT_TOKEN", "token"),
            ("DISCORD_GUILD_ID", "1"),
            ("DISCORD_VERIFIED_ROLE_ID", "2"),
            ("DISCORD_WELCOME_CHANNEL_ID", "3"),
            ("GMAIL_ADDRESS", "bot@example.org"),
            ("GMAIL_APP_PASSWORD", "secret"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let mut config = AppConfig::from_lookup(|k| vars.get(k).cloned())
            .expect("complete configuration");
        config.verification.role_mappings = mappings
            .iter()
            .map(|(d, r)| (d.to_string(), r.to_string()))
            .collect();
        config
    }

    #[test]
    fn test_domain_roles_accepts_snowflakes() {
        let config = config_with(&[("sub.kosen-ac.jp", "123456789012345678")]);
        let roles = domain_roles(&config).unwrap();
        assert_eq!(
            roles.role_for_domain("sub.kosen-ac.jp"),
            Some(&RoleId::from("123456789012345678"))
        );
    }

    #[test]
    fn test_domain_roles_rejects_non_snowflakes() {
        let config = config_with(&[("sub.kosen-ac.jp", "role_123")]);
        assert!(domain_roles(&config).is_err());
    }
}
