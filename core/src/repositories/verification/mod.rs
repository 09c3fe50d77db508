//! Pending verification store module.

mod r#trait;
pub use r#trait::VerificationStore;

mod memory;
pub use memory::InMemoryVerificationStore;
