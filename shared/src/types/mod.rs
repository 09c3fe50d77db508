//! Type definitions shared across crates
//!
//! - `language` - Language selection for localized responses

pub mod language;

pub use language::Language;
