//! `/code`: confirm a verification code

use std::collections::HashMap;

use kv_core::domain::value_objects::SubjectId;
use kv_core::repositories::VerificationStore;
use kv_core::services::{
    ChannelServiceTrait, DomainRoleOutcome, MailServiceTrait, OnboardingService,
    RoleServiceTrait, VerificationService,
};
use kv_shared::Language;
use validator::Validate;

use crate::dto::CodeCommandInput;
use crate::i18n::{error_message, format_message, response};

use super::error::localize_error;

/// Confirm the code; on success the subject's onboarding channel, if the bot
/// opened one, is scheduled for deletion
pub async fn confirm_code<M, S, R, C>(
    service: &VerificationService<M, S, R>,
    onboarding: &OnboardingService<C>,
    subject: &SubjectId,
    code: &str,
    lang: Language,
) -> String
where
    M: MailServiceTrait,
    S: VerificationStore,
    R: RoleServiceTrait,
    C: ChannelServiceTrait + 'static,
{
    let input = CodeCommandInput::new(code);
    if input.validate().is_err() {
        return error_message("INVALID_CODE_FORMAT", lang);
    }

    let confirmed = match service.confirm(subject, &input.code).await {
        Ok(confirmed) => confirmed,
        Err(e) => return localize_error(&e, lang),
    };

    let mut lines = vec![response("verified", lang)];

    if let DomainRoleOutcome::Failed { .. } = confirmed.authorization.domain_role {
        lines.push(response("domain_role_failed", lang));
    }

    if onboarding.schedule_close(subject).await.is_some() {
        let mut params = HashMap::new();
        params.insert("seconds", onboarding.delete_delay().as_secs().to_string());
        lines.push(format_message(&response("channel_closing", lang), &params));
    }

    lines.join("\n")
}
