//! Sealing using NaCl secretbox (XSalsa20Poly1305)
//!
//! The binary format written out is:
//! - nonce: 24 bytes
//! - sealed box: plaintext length + 16 bytes (includes the Poly1305 MAC)
//!
//! There is no salt, no length field and no version marker. The key comes
//! from [`crate::keyderive`].

use crate::error::{ErrorCategory, Result, SealboxError};
use crate::keyderive::KEY_LEN;
use crate::nonce::{NONCE_LEN, NonceSource};
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::{Nonce, XSalsa20Poly1305};

/// Bytes added to the plaintext by sealing (the Poly1305 tag)
pub const OVERHEAD: usize = 16;

/// A sealed message together with the nonce it was sealed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    nonce: [u8; NONCE_LEN],
    ciphertext: Vec<u8>,
}

impl SealedMessage {
    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// The sealed box, without the nonce prefix.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Length of the serialized form.
    pub fn encoded_len(&self) -> usize {
        NONCE_LEN + self.ciphertext.len()
    }

    /// Serialize as nonce(24) + sealedbox(variable).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.encoded_len());
        output.extend_from_slice(&self.nonce);
        output.extend_from_slice(&self.ciphertext);
        output
    }
}

/// Seal plaintext under the given key and nonce
///
/// Deterministic: identical inputs always give identical output. The caller
/// is responsible for prefixing the nonce.
pub fn seal(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new(&(*key).into());
    let nonce_obj = Nonce::from(*nonce);
    cipher
        .encrypt(&nonce_obj, plaintext)
        .map_err(|e| SealboxError::new(ErrorCategory::Internal, format!("sealing failed: {}", e)))
}

/// Seal plaintext under a nonce drawn from `nonce_source`
pub fn encrypt(
    key: &[u8; KEY_LEN],
    plaintext: &[u8],
    nonce_source: &mut dyn NonceSource,
) -> Result<SealedMessage> {
    let nonce = nonce_source
        .generate_nonce()
        .map_err(|e| e.with_context("failed to generate nonce"))?;
    let ciphertext = seal(key, &nonce, plaintext)?;
    Ok(SealedMessage { nonce, ciphertext })
}
