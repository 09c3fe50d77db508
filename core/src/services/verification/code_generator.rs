//! Verification code generation

use rand::{rngs::OsRng, RngCore};

use crate::domain::entities::CODE_LENGTH;
use crate::errors::{DomainError, DomainResult};

/// Number of distinct codes (10^CODE_LENGTH)
const CODE_SPACE: u32 = 1_000_000;

/// Largest multiple of `CODE_SPACE` representable in a u32; draws at or above
/// it are rejected so every code is equally likely.
const ACCEPT_ZONE: u32 = u32::MAX - (u32::MAX % CODE_SPACE);

/// Source of verification codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a code matching `^\d{6}$`
    fn generate(&self) -> DomainResult<String>;
}

/// Generates codes from the operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureCodeGenerator;

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> DomainResult<String> {
        generate_secure_code()
    }
}

/// Generate a uniformly distributed 6-digit code using `OsRng`
pub fn generate_secure_code() -> DomainResult<String> {
    generate_code_from(&mut OsRng)
}

pub(crate) fn generate_code_from<R: RngCore + ?Sized>(rng: &mut R) -> DomainResult<String> {
    let mut bytes = [0u8; 4];
    loop {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| DomainError::RandomSource {
                message: e.to_string(),
            })?;
        let num = u32::from_le_bytes(bytes);
        if num < ACCEPT_ZONE {
            return Ok(format!("{:0width$}", num % CODE_SPACE, width = CODE_LENGTH));
        }
    }
}
