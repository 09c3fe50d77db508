//! Mapping of domain errors to localized replies

use std::collections::HashMap;

use kv_core::errors::{DomainError, VerificationError};
use kv_shared::Language;

use crate::i18n::{error_message, format_message};

/// Localized reply for a failed workflow step
pub fn localize_error(error: &DomainError, lang: Language) -> String {
    let template = error_message(error.code(), lang);

    let mut params = HashMap::new();
    if let DomainError::Verification(VerificationError::DomainNotAllowed { root, .. }) = error {
        params.insert("root", root.clone());
    }

    if !error.is_user_error() {
        tracing::debug!(code = error.code(), error = %error, "Replying with failure");
    }

    format_message(&template, &params)
}
