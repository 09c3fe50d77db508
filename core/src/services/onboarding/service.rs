use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::value_objects::{ChannelId, SubjectId};
use crate::errors::{DomainResult, TransportError};

use super::traits::ChannelServiceTrait;

/// Opens private onboarding channels and closes them after verification
///
/// Only channels opened through this service are ever deleted; a confirm
/// issued from any other channel leaves that channel alone.
pub struct OnboardingService<C>
where
    C: ChannelServiceTrait + 'static,
{
    channel_service: Arc<C>,
    delete_delay: Duration,
    registry: Mutex<HashMap<SubjectId, ChannelId>>,
}

impl<C> OnboardingService<C>
where
    C: ChannelServiceTrait + 'static,
{
    pub fn new(channel_service: Arc<C>, delete_delay: Duration) -> Self {
        Self {
            channel_service,
            delete_delay,
            registry: Mutex::new(HashMap::new()),
        }
    }

    pub fn delete_delay(&self) -> Duration {
        self.delete_delay
    }

    /// Create the subject's private channel and post instructions into it
    ///
    /// A subject clicking again gets a new channel; the registration moves to
    /// it and the older channel is left for moderators.
    pub async fn open(&self, subject: &SubjectId, display_name: &str) -> DomainResult<ChannelId> {
        let channel = self
            .channel_service
            .create_private_channel(subject, display_name)
            .await
            .map_err(|reason| {
                tracing::error!(
                    subject = %subject,
                    error = %reason,
                    event = "channel_create_failed",
                    "Failed to create onboarding channel"
                );
                TransportError::Channel { reason }
            })?;

        if let Err(reason) = self.channel_service.post_instructions(&channel).await {
            tracing::warn!(
                subject = %subject,
                channel = %channel,
                error = %reason,
                event = "instructions_post_failed",
                "Failed to post onboarding instructions"
            );
        }

        let previous = self
            .registry
            .lock()
            .await
            .insert(subject.clone(), channel.clone());
        if let Some(previous) = previous {
            tracing::debug!(
                subject = %subject,
                channel = %previous,
                event = "channel_replaced",
                "Onboarding channel registration replaced"
            );
        }

        tracing::info!(
            subject = %subject,
            channel = %channel,
            event = "channel_opened",
            "Opened onboarding channel"
        );

        Ok(channel)
    }

    /// Channel currently registered for a subject
    pub async fn channel_for(&self, subject: &SubjectId) -> Option<ChannelId> {
        self.registry.lock().await.get(subject).cloned()
    }

    /// Schedule deletion of the subject's registered channel
    ///
    /// Returns immediately. The returned handle resolves once the delete has
    /// been attempted; `None` when the subject has no registered channel.
    pub async fn schedule_close(&self, subject: &SubjectId) -> Option<JoinHandle<()>> {
        let channel = self.registry.lock().await.remove(subject)?;
        let channel_service = Arc::clone(&self.channel_service);
        let delay = self.delete_delay;
        let subject = subject.clone();

        tracing::debug!(
            subject = %subject,
            channel = %channel,
            delay_secs = delay.as_secs(),
            event = "channel_close_scheduled",
            "Scheduled onboarding channel deletion"
        );

        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match channel_service.delete_channel(&channel).await {
                Ok(()) => tracing::info!(
                    subject = %subject,
                    channel = %channel,
                    event = "channel_deleted",
                    "Deleted onboarding channel"
                ),
                Err(reason) => tracing::error!(
                    subject = %subject,
                    channel = %channel,
                    error = %reason,
                    event = "channel_delete_failed",
                    "Failed to delete onboarding channel"
                ),
            }
        }))
    }
}
