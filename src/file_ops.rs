//! Writing sealed output to disk
//!
//! This module ties key derivation, nonce generation and sealing together
//! and persists the result.

use crate::error::{Result, SealboxError};
use crate::keyderive::{self, KEY_LEN, PADDING};
use crate::nonce::{NONCE_LEN, NonceSource};
use crate::secretcrypt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use zeroize::Zeroizing;

/// Mode a newly created output file is requested with on Unix systems,
/// subject to the process umask
pub const OUTPUT_MODE: u32 = 0o644;

/// What was written, for reporting
#[derive(Debug, Clone)]
pub struct EncryptionSummary {
    /// Total bytes written (nonce + sealed box).
    pub output_len: usize,
    pub plaintext_len: usize,
    pub nonce: [u8; NONCE_LEN],
    /// The derived key. Wiped from memory on drop.
    pub key: Zeroizing<[u8; KEY_LEN]>,
}

/// Seal `plaintext` under a key derived from `passphrase` and write
/// nonce + sealed box to `output_path`
///
/// Any existing file at `output_path` is replaced. Nothing is written if
/// nonce generation fails.
pub fn encrypt_to_file(
    passphrase: &[u8],
    plaintext: &[u8],
    output_path: &Path,
    nonce_source: &mut dyn NonceSource,
) -> Result<EncryptionSummary> {
    let key = keyderive::derive_key_weak(passphrase, PADDING);
    let sealed = secretcrypt::encrypt(&key, plaintext, nonce_source)
        .map_err(|e| e.with_context("encryption failed"))?;
    let output = sealed.to_bytes();
    write_output(output_path, &output)?;

    Ok(EncryptionSummary {
        output_len: output.len(),
        plaintext_len: plaintext.len(),
        nonce: *sealed.nonce(),
        key,
    })
}

/// Write `contents` to `path`, creating it with mode 0o644 (less umask) on Unix
///
/// Normally the data goes to a temporary file in the target directory which
/// is flushed, fsynced and then renamed over `path`. On any failure the
/// temporary file is removed, so `path` is either untouched or complete.
///
/// A symlink at `path` is written through rather than replaced. If the
/// directory is not writable but `path` is an existing file, that file is
/// truncated and rewritten in place instead.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let is_symlink = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        return write_in_place(path, contents);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".sealbox-");
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        builder.permissions(Permissions::from_mode(OUTPUT_MODE));
    }

    let mut temp_file = match builder.tempfile_in(dir) {
        Ok(temp_file) => temp_file,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied && path.is_file() => {
            return write_in_place(path, contents);
        }
        Err(e) => {
            return Err(SealboxError::persistence(
                format!("failed to create temporary file in {}", dir.display()),
                e,
            ));
        }
    };

    temp_file
        .write_all(contents)
        .map_err(|e| SealboxError::persistence("failed to write to tempfile", e))?;
    // Flush and fsync() such that the rename later, if it succeeds, will
    // always point to a complete file.
    temp_file
        .flush()
        .map_err(|e| SealboxError::persistence("failed to flush tempfile", e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| SealboxError::persistence("failed to sync file prior to rename", e))?;

    temp_file.persist(path).map_err(|e| {
        SealboxError::persistence(format!("failed to write {}", path.display()), e.error)
    })?;
    Ok(())
}

/// Truncate and rewrite `path` directly, keeping an existing file's mode.
///
/// Not atomic: a failure part way leaves a short file, but is still reported.
fn write_in_place(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;

        options.mode(OUTPUT_MODE);
    }

    let mut file = options
        .open(path)
        .map_err(|e| SealboxError::persistence(format!("failed to open {}", path.display()), e))?;
    file.write_all(contents)
        .map_err(|e| SealboxError::persistence(format!("failed to write {}", path.display()), e))?;
    file.sync_all()
        .map_err(|e| SealboxError::persistence(format!("failed to sync {}", path.display()), e))?;
    Ok(())
}
