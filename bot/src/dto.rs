//! Slash command inputs, validated before they reach the workflow

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCommandInput {
    /// Claimed school address, e.g. "alice@sub.kosen-ac.jp"
    #[validate(length(min = 3, max = 254))]
    pub email: String,
}

impl VerifyCommandInput {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CodeCommandInput {
    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

impl CodeCommandInput {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_string(),
        }
    }
}
