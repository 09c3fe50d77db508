//! Verification service module for email-based membership checks
//!
//! This module provides the verification code workflow:
//! - Domain allow-list validation of the claimed email
//! - Secure 6-digit code generation
//! - Pending record storage and mail delivery of the code
//! - Code confirmation followed by role grants

mod code_generator;
mod config;
mod domain_validator;
mod service;
mod traits;
mod types;


pub use code_generator::{generate_secure_code, CodeGenerator, SecureCodeGenerator};
pub use config::VerificationServiceConfig;
pub use domain_validator::DomainValidator;
pub use service::VerificationService;
pub use traits::MailServiceTrait;
pub use types::{ConfirmResult, StartResult};
