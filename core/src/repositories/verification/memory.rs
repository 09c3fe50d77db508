//! Memory-resident verification store. Everything is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::VerificationStore;
use crate::domain::entities::PendingVerification;
use crate::domain::value_objects::SubjectId;

/// Mutex-guarded map from subject to pending verification
///
/// The lock is held only for the map operation itself, never across mail or
/// platform calls.
#[derive(Default)]
pub struct InMemoryVerificationStore {
    records: Mutex<HashMap<SubjectId, PendingVerification>>,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VerificationStore for InMemoryVerificationStore {
    async fn put(&self, record: PendingVerification) {
        let mut records = self.records.lock().await;
        if let Some(previous) = records.insert(record.subject.clone(), record) {
            tracing::debug!(
                subject = %previous.subject,
                previous_id = %previous.id,
                "Replaced pending verification"
            );
        }
    }

    async fn get(&self, subject: &SubjectId) -> Option<PendingVerification> {
        self.records.lock().await.get(subject).cloned()
    }

    async fn remove(&self, subject: &SubjectId) -> Option<PendingVerification> {
        self.records.lock().await.remove(subject)
    }

    async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn record(subject: u64, code: &str) -> PendingVerification {
        PendingVerification::new(
            SubjectId::from(subject),
            code.to_string(),
            "alice@kosen-ac.jp".to_string(),
        )
    }

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = InMemoryVerificationStore::new();
        let subject = SubjectId::from(1u64);

        assert!(store.get(&subject).await.is_none());

        store.put(record(1, "111111")).await;
        assert_eq!(store.get(&subject).await.unwrap().code, "111111");

        let removed = store.remove(&subject).await.unwrap();
        assert_eq!(removed.code, "111111");
        assert!(store.get(&subject).await.is_none());

        // Removing again is a no-op
        assert!(store.remove(&subject).await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_existing_record() {
        let store = InMemoryVerificationStore::new();
        let subject = SubjectId::from(1u64);

        store.put(record(1, "111111")).await;
        store.put(record(1, "222222")).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&subject).await.unwrap().code, "222222");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_subjects_do_not_interfere() {
        let store = Arc::new(InMemoryVerificationStore::new());

        let handles: Vec<_> = (0..50u64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.put(record(i, &format!("{:06}", i))).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 50);
        for i in 0..50u64 {
            let stored = store.get(&SubjectId::from(i)).await.unwrap();
            assert_eq!(stored.code, format!("{:06}", i));
        }
    }
}
