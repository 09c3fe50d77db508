//! `/verify`: start email verification

use std::collections::HashMap;

use kv_core::domain::value_objects::SubjectId;
use kv_core::repositories::VerificationStore;
use kv_core::services::{MailServiceTrait, RoleServiceTrait, VerificationService};
use kv_shared::Language;
use validator::Validate;

use crate::dto::VerifyCommandInput;
use crate::i18n::{error_message, format_message, response};

use super::error::localize_error;

pub async fn start_verification<M, S, R>(
    service: &VerificationService<M, S, R>,
    subject: &SubjectId,
    email: &str,
    lang: Language,
) -> String
where
    M: MailServiceTrait,
    S: VerificationStore,
    R: RoleServiceTrait,
{
    let input = VerifyCommandInput::new(email);
    if let Err(errors) = input.validate() {
        tracing::warn!(subject = %subject, errors = %errors, "Rejected /verify input");
        return error_message("INVALID_EMAIL_FORMAT", lang);
    }

    match service.start(subject, &input.email).await {
        Ok(started) => {
            let mut params = HashMap::new();
            params.insert("email", started.masked_email);
            format_message(&response("code_sent", lang), &params)
        }
        Err(e) => localize_error(&e, lang),
    }
}
