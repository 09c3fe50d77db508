//! Welcome button: open a private onboarding channel

use std::collections::HashMap;

use kv_core::domain::value_objects::SubjectId;
use kv_core::services::{ChannelServiceTrait, OnboardingService};
use kv_shared::Language;

use crate::i18n::{format_message, response};

use super::error::localize_error;

pub async fn open_private_channel<C>(
    onboarding: &OnboardingService<C>,
    subject: &SubjectId,
    display_name: &str,
    lang: Language,
) -> String
where
    C: ChannelServiceTrait + 'static,
{
    match onboarding.open(subject, display_name).await {
        Ok(channel) => {
            let mut params = HashMap::new();
            params.insert("channel", format!("<#{}>", channel));
            format_message(&response("channel_created", lang), &params)
        }
        Err(e) => localize_error(&e, lang),
    }
}
