//! Pending verification entity, one per subject awaiting code confirmation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::SubjectId;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// A code that has been issued to a subject and not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    /// Identifier of this attempt, used to correlate log lines
    pub id: Uuid,

    /// Subject the code was issued to
    pub subject: SubjectId,

    /// The 6-digit verification code
    pub code: String,

    /// Email address the code was sent to
    pub email: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is rejected; `None` means never
    pub expires_at: Option<DateTime<Utc>>,
}

impl PendingVerification {
    /// Creates a record that never expires
    pub fn new(subject: SubjectId, code: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject,
            code,
            email,
            issued_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Creates a record that expires after `ttl_minutes`
    pub fn new_with_expiration(
        subject: SubjectId,
        code: String,
        email: String,
        ttl_minutes: i64,
    ) -> Self {
        let mut record = Self::new(subject, code, email);
        record.expires_at = Some(record.issued_at + Duration::minutes(ttl_minutes));
        record
    }

    /// Checks if the code has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
