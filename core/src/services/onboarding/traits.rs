use async_trait::async_trait;

use crate::domain::value_objects::{ChannelId, SubjectId};

/// Chat platform channel operations needed for onboarding
#[async_trait]
pub trait ChannelServiceTrait: Send + Sync {
    /// Create a channel visible only to `subject` and the bot
    async fn create_private_channel(
        &self,
        subject: &SubjectId,
        display_name: &str,
    ) -> Result<ChannelId, String>;

    /// Post the verification instructions into the channel
    async fn post_instructions(&self, channel: &ChannelId) -> Result<(), String>;

    async fn delete_channel(&self, channel: &ChannelId) -> Result<(), String>;
}
