//! Email domain allow-list

use kv_shared::email::split_email;

use crate::errors::VerificationError;

/// Accepts emails at a root domain or any of its subdomains
#[derive(Debug, Clone)]
pub struct DomainValidator {
    root: String,
    dotted_root: String,
}

impl DomainValidator {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into().trim().trim_matches('.').to_lowercase();
        let dotted_root = format!(".{}", root);
        Self { root, dotted_root }
    }

    /// Whether `domain` equals the root or ends with `.` + root.
    /// An empty root allows nothing.
    pub fn is_allowed_domain(&self, domain: &str) -> bool {
        if self.root.is_empty() {
            return false;
        }
        let domain = domain.to_lowercase();
        domain == self.root || domain.ends_with(&self.dotted_root)
    }

    pub fn is_allowed_email(&self, email: &str) -> bool {
        self.validate_email(email).is_ok()
    }

    /// Validate an email, returning its lowercased domain
    pub fn validate_email(&self, email: &str) -> Result<String, VerificationError> {
        let (_, domain) = split_email(email).ok_or(VerificationError::InvalidEmailFormat)?;
        if self.is_allowed_domain(domain) {
            Ok(domain.to_lowercase())
        } else {
            Err(VerificationError::DomainNotAllowed {
                domain: domain.to_string(),
                root: self.root.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> DomainValidator {
        DomainValidator::new("kosen-ac.jp")
    }

    #[test]
    fn test_root_and_subdomains_allowed() {
        let v = validator();
        assert!(v.is_allowed_email("alice@kosen-ac.jp"));
        assert!(v.is_allowed_email("alice@sub.kosen-ac.jp"));
        assert!(v.is_allowed_email("alice@a.b.kosen-ac.jp"));
        assert!(v.is_allowed_email("alice@Sub.KOSEN-AC.jp"));
    }

    #[test]
    fn test_other_domains_rejected() {
        let v = validator();
        assert!(!v.is_allowed_email("user@example.com"));
        assert!(!v.is_allowed_email("user@evilkosen-ac.jp"));
        assert!(!v.is_allowed_email("user@kosen-ac.jp.example.com"));
        assert_eq!(
            v.validate_email("user@example.com"),
            Err(VerificationError::DomainNotAllowed {
                domain: "example.com".to_string(),
                root: "kosen-ac.jp".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_emails_rejected() {
        let v = validator();
        assert_eq!(
            v.validate_email("kosen-ac.jp"),
            Err(VerificationError::InvalidEmailFormat)
        );
        assert_eq!(
            v.validate_email("a@b@kosen-ac.jp"),
            Err(VerificationError::InvalidEmailFormat)
        );
    }

    #[test]
    fn test_validate_returns_lowercased_domain() {
        assert_eq!(
            validator().validate_email("bob@SUB.kosen-ac.jp"),
            Ok("sub.kosen-ac.jp".to_string())
        );
    }

    #[test]
    fn test_empty_root_allows_nothing() {
        for root in ["", ".", "..."] {
            let v = DomainValidator::new(root);
            assert!(!v.is_allowed_email("a@"));
            assert!(!v.is_allowed_email("x@evil.com."));
            assert!(!v.is_allowed_email("x@evil.com"));
            assert!(matches!(
                v.validate_email("x@evil.com."),
                Err(VerificationError::DomainNotAllowed { .. })
            ));
        }
    }
}
