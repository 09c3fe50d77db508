//! Business services containing the verification use cases.

pub mod authorization;
pub mod onboarding;
pub mod verification;

// Re-export commonly used types
pub use authorization::{AuthorizationOutcome, AuthorizationService, DomainRoleOutcome, RoleServiceTrait};
pub use onboarding::{ChannelServiceTrait, OnboardingService};
pub use verification::{
    CodeGenerator, ConfirmResult, DomainValidator, MailServiceTrait, SecureCodeGenerator,
    StartResult, VerificationService, VerificationServiceConfig,
};

#[cfg(test)]
pub(crate) mod mocks;
