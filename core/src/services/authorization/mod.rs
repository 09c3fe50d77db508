//! Authorization applier: grants the base role and the optional
//! domain-specific role to a verified subject.

mod service;
mod traits;

pub use service::{AuthorizationOutcome, AuthorizationService, DomainRoleOutcome};
pub use traits::RoleServiceTrait;
