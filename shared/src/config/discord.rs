//! Discord configuration module

use super::{ConfigResult, EnvVars};

/// Discord bot configuration
#[derive(Clone)]
pub struct DiscordConfig {
    /// Bot token (without the `Bot ` prefix)
    pub bot_token: String,

    /// Guild the bot serves and registers its commands in
    pub guild_id: u64,

    /// Base role granted to every verified member
    pub verified_role_id: u64,

    /// Channel holding the "start verification" button
    pub welcome_channel_id: u64,

    /// Category under which private onboarding channels are created
    pub private_category_id: Option<u64>,
}

impl DiscordConfig {
    pub(crate) fn from_vars(vars: &EnvVars<'_>) -> ConfigResult<Self> {
        Ok(Self {
            bot_token: vars.required("DISCORD_BOT_TOKEN")?,
            guild_id: vars.required_snowflake("DISCORD_GUILD_ID")?,
            verified_role_id: vars.required_snowflake("DISCORD_VERIFIED_ROLE_ID")?,
            welcome_channel_id: vars.required_snowflake("DISCORD_WELCOME_CHANNEL_ID")?,
            private_category_id: vars.optional_snowflake("DISCORD_PRIVATE_CATEGORY_ID")?,
        })
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("bot_token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("verified_role_id", &self.verified_role_id)
            .field("welcome_channel_id", &self.welcome_channel_id)
            .field("private_category_id", &self.private_category_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_support::complete_vars;
    use crate::config::{AppConfig, ConfigError};

    #[test]
    fn test_private_category_is_optional() {
        let mut vars = complete_vars();
        vars.insert("DISCORD_PRIVATE_CATEGORY_ID".to_string(), "4000".to_string());
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.discord.private_category_id, Some(4000));
    }

    #[test]
    fn test_invalid_guild_id() {
        let mut vars = complete_vars();
        vars.insert("DISCORD_GUILD_ID".to_string(), "my-guild".to_string());
        let result = AppConfig::from_lookup(|k| vars.get(k).cloned());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_debug_redacts_token() {
        let vars = complete_vars();
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let debug = format!("{:?}", config.discord);
        assert!(!debug.contains("token-abc"));
        assert!(debug.contains("<redacted>"));
    }
}
