//! Value objects representing immutable domain concepts.

pub mod domain_role_map;
pub mod identifiers;

pub use domain_role_map::DomainRoleMap;
pub use identifiers::{ChannelId, RoleId, SubjectId};
