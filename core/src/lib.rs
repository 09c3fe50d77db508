//! # Kosen Verify Core
//!
//! Core business logic for gating a Discord guild behind email-domain
//! verification. This crate contains the domain entities, the verification
//! workflow, authorization (role grant) rules, the private onboarding channel
//! lifecycle, the in-memory verification store, and the error types. Every
//! outside collaborator (mail relay, chat platform) is reached through a trait.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{InMemoryVerificationStore, VerificationStore};
pub use services::*;
