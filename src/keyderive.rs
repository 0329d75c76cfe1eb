//! Weak passphrase-to-key stretching
//!
//! The secretbox key is exactly 32 bytes. A passphrase is turned into a key by
//! appending a public padding constant and truncating to 32 bytes. This is
//! NOT a password-based key derivation function: short passphrases yield a
//! key that is mostly the public padding, and there is no work factor against
//! guessing. It is kept for compatibility with existing `encrypted.dat` files
//! and lives here, isolated, so it can be replaced by a real KDF without
//! touching the sealing code.

use zeroize::Zeroizing;

/// Length of the secretbox key in bytes
pub const KEY_LEN: usize = 32;

/// Public padding appended to short passphrases. Anyone opening the output
/// must use the same bytes.
///
/// This is the UTF-8 encoding of `«super jumpy fox jumps all over»`.
pub const PADDING: &[u8; 34] = b"\xc2\xabsuper jumpy fox jumps all over\xc2\xbb";

/// Derive a 32-byte key as `(passphrase ++ padding)[..32]`.
///
/// A passphrase of 32 bytes or more is simply truncated and the padding is
/// irrelevant. The padding must be at least [`KEY_LEN`] bytes long, which is
/// checked at compile time.
pub fn derive_key_weak<const N: usize>(
    passphrase: &[u8],
    padding: &[u8; N],
) -> Zeroizing<[u8; KEY_LEN]> {
    const { assert!(N >= KEY_LEN, "padding must be at least KEY_LEN bytes") };

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    let taken = passphrase.len().min(KEY_LEN);
    key[..taken].copy_from_slice(&passphrase[..taken]);
    key[taken..].copy_from_slice(&padding[..KEY_LEN - taken]);
    key
}
