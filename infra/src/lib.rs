//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits declared by `kv_core`:
//!
//! - **Mail**: verification code delivery over authenticated SMTP (`lettre`)
//!   or to the console for development
//! - **Discord**: role grants and private channel management over the
//!   Discord REST API (`serenity`)
//!
//! ## Features
//!
//! - `smtp-mail`: Enable SMTP delivery (default)

// Re-export core types for convenience
pub use kv_core::errors::*;

/// Mail module - verification code notifiers
pub mod mail;

/// Discord module - REST adapters for roles and channels
pub mod discord;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// SMTP transport error
    #[cfg(feature = "smtp-mail")]
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Malformed sender or recipient address
    #[cfg(feature = "smtp-mail")]
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[cfg(feature = "smtp-mail")]
    #[error("Mail build error: {0}")]
    MailBuild(#[from] lettre::error::Error),

    /// Identifier is not a Discord snowflake
    #[error("Invalid Discord id: {0}")]
    InvalidId(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),
}
