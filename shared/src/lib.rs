//! Shared utilities and common types for the Kosen verify bot
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types loaded from the environment
//! - Language selection for user-facing messages
//! - Email address helpers (splitting, masking for logs)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DiscordConfig, Environment, LogFormat, LoggingConfig, MailConfig,
    VerificationConfig,
};
pub use types::Language;
pub use utils::email;
