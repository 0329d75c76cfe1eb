//! Sealbox CLI
//!
//! Seals a fixed message with NaCl secretbox (XSalsa20Poly1305) and writes
//! the nonce-prefixed result to `encrypted.dat` in the working directory.

use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process;

use sealbox::error::{ErrorCategory, SealboxError};
use sealbox::file_ops;
use sealbox::nonce::OsNonceSource;
use sealbox::report;
use zeroize::Zeroizing;

/// The message that gets sealed.
const MESSAGE: &[u8] = b"Hello world";

/// Where the nonce-prefixed ciphertext is written.
const OUTPUT_FILE: &str = "encrypted.dat";

#[derive(Parser)]
#[command(name = "sealbox")]
#[command(version)]
#[command(about = "Seals a message into encrypted.dat.", long_about = None)]
struct Cli {
    /// Encryption key; padded or truncated to 32 bytes
    #[arg(short = 'k', value_name = "KEY", default_value = "qwerty")]
    key: OsString,
}

fn main() {
    let cli = Cli::parse();
    let passphrase = Zeroizing::new(cli.key.into_encoded_bytes());

    let result = file_ops::encrypt_to_file(
        &passphrase,
        MESSAGE,
        Path::new(OUTPUT_FILE),
        &mut OsNonceSource::new(),
    )
    .and_then(|summary| {
        report::report(&summary, &mut io::stdout().lock()).map_err(|e| {
            SealboxError::with_source(
                ErrorCategory::Internal,
                format!("failed to write report: {}", e),
                e,
            )
        })
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
