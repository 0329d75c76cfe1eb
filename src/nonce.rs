//! Nonce generation

use crate::error::{ErrorCategory, ErrorKind, Result, SealboxError};
use rand::RngCore;
use rand::rngs::OsRng;

/// Length of nonce in bytes
pub const NONCE_LEN: usize = 24;

/// Trait for obtaining the nonce used to seal a message
pub trait NonceSource {
    /// Produce a nonce. Each call on a real source must return fresh bytes;
    /// a nonce must never be reused with the same key for different messages.
    fn generate_nonce(&mut self) -> Result<[u8; NONCE_LEN]>;
}

/// Draws nonces from the operating system's CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonceSource;

impl OsNonceSource {
    pub fn new() -> Self {
        Self
    }
}

impl NonceSource for OsNonceSource {
    fn generate_nonce(&mut self) -> Result<[u8; NONCE_LEN]> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.try_fill_bytes(&mut nonce).map_err(|e| {
            SealboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::RandomSource,
                format!("could not read from random source: {}", e),
                e,
            )
        })?;
        Ok(nonce)
    }
}

/// Returns a fixed nonce (for testing)
///
/// This is ONLY for producing deterministic output in tests and known-answer
/// vectors. Never seal more than one message with it under the same key.
pub struct FixedNonceSource {
    nonce: [u8; NONCE_LEN],
}

impl FixedNonceSource {
    pub fn new(nonce: [u8; NONCE_LEN]) -> Self {
        Self { nonce }
    }
}

impl NonceSource for FixedNonceSource {
    fn generate_nonce(&mut self) -> Result<[u8; NONCE_LEN]> {
        Ok(self.nonce)
    }
}
