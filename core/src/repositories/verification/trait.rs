use async_trait::async_trait;

use crate::domain::entities::PendingVerification;
use crate::domain::value_objects::SubjectId;

/// Store of pending verifications, keyed by subject
///
/// Each call is atomic on its own. Callers that read and later remove do so in
/// two separate critical sections; only a subject racing with itself can
/// interleave between them.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Store a record, replacing any existing one for the same subject
    async fn put(&self, record: PendingVerification);

    /// Get the current record for a subject
    async fn get(&self, subject: &SubjectId) -> Option<PendingVerification>;

    /// Delete the record for a subject, returning it if it existed
    async fn remove(&self, subject: &SubjectId) -> Option<PendingVerification>;

    /// Number of subjects with a pending record
    async fn len(&self) -> usize;
}
