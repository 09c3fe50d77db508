//! Mail relay configuration module

use super::{ConfigError, ConfigResult, EnvVars};

/// Default relay host (Gmail submission)
pub const DEFAULT_RELAY_HOST: &str = "smtp.gmail.com";

/// Default submission port (STARTTLS)
pub const DEFAULT_RELAY_PORT: u16 = 587;

/// Default subject line of the verification mail
pub const DEFAULT_SUBJECT: &str = "Discord Verification Code";

/// Which notifier implementation delivers verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailProvider {
    /// Authenticated SMTP submission
    Smtp,
    /// Console output, for development
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" | "gmail" => Ok(MailProvider::Smtp),
            "mock" | "console" => Ok(MailProvider::Mock),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

/// Mail relay configuration
#[derive(Clone)]
pub struct MailConfig {
    pub provider: MailProvider,
    /// Sender address, also the SMTP username
    pub sender_address: String,
    /// App password for the sender account
    pub app_password: String,
    pub relay_host: String,
    pub relay_port: u16,
    pub subject: String,
}

impl MailConfig {
    pub(crate) fn from_vars(vars: &EnvVars<'_>) -> ConfigResult<Self> {
        let sender_address = vars.required("GMAIL_ADDRESS")?;
        if !sender_address.contains('@') {
            return Err(ConfigError::InvalidValue {
                name: "GMAIL_ADDRESS".to_string(),
                reason: "sender address must contain '@'".to_string(),
            });
        }

        Ok(Self {
            provider: vars.parse_or("MAIL_PROVIDER", MailProvider::Smtp)?,
            sender_address,
            app_password: vars.required("GMAIL_APP_PASSWORD")?,
            relay_host: vars
                .optional("SMTP_HOST")
                .unwrap_or_else(|| DEFAULT_RELAY_HOST.to_string()),
            relay_port: vars.parse_or("SMTP_PORT", DEFAULT_RELAY_PORT)?,
            subject: vars
                .optional("MAIL_SUBJECT")
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        })
    }

    /// `host:port` of the relay
    pub fn relay_address(&self) -> String {
        format!("{}:{}", self.relay_host, self.relay_port)
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("sender_address", &self.sender_address)
            .field("app_password", &"<redacted>")
            .field("relay_host", &self.relay_host)
            .field("relay_port", &self.relay_port)
            .field("subject", &self.subject)
            .finish()
    }
}
