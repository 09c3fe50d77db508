//! Repository interfaces and their in-memory implementations.

pub mod verification;

pub use verification::{InMemoryVerificationStore, VerificationStore};
