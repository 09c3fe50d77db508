//! Types for verification service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::services::authorization::AuthorizationOutcome;

/// Result of starting a verification
#[derive(Debug, Clone)]
pub struct StartResult {
    /// Identifier of the stored pending record
    pub verification_id: Uuid,
    /// Masked destination, safe to echo back or log
    pub masked_email: String,
    /// Delivery identifier reported by the notifier
    pub delivery_id: String,
    /// When the code stops being accepted, if expiry is enabled
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of a successful confirmation
#[derive(Debug, Clone)]
pub struct ConfirmResult {
    /// Identifier of the consumed pending record
    pub verification_id: Uuid,
    /// Email address that was verified
    pub email: String,
    /// Roles that were granted
    pub authorization: AuthorizationOutcome,
}
