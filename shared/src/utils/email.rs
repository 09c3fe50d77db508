//! Email address helpers

/// Split an email address into `(local, domain)`
///
/// Returns `None` unless the address contains exactly one `@`.
pub fn split_email(email: &str) -> Option<(&str, &str)> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => Some((local, domain)),
        _ => None,
    }
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain, so
/// operators can still tell which school a request came from.
///
/// # Example
///
/// ```
/// use kv_shared::email::mask_email;
///
/// assert_eq!(mask_email("alice@sub.kosen-ac.jp"), "a***@sub.kosen-ac.jp");
/// ```
pub fn mask_email(email: &str) -> String {
    match split_email(email) {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "*".repeat(email.chars().count().min(8)),
    }
}
