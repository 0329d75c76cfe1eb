//! Human-readable summary of a completed encryption

use crate::file_ops::EncryptionSummary;
use crate::nonce::NONCE_LEN;
use crate::secretcrypt::OVERHEAD;
use std::io::{self, Write};

/// Write the post-encryption summary to `out`.
///
/// Warning: the key line prints the raw secret key.
pub fn report(summary: &EncryptionSummary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "Message encrypted successfully. Total size is {} bytes, of which {} bytes is the message, \
         {} bytes is the nonce and {} bytes is the overhead.",
        summary.output_len, summary.plaintext_len, NONCE_LEN, OVERHEAD
    )?;

    out.write_all(b"The encryption key is: '")?;
    out.write_all(&summary.key[..])?;
    out.write_all(b"'\n")?;

    writeln!(out, "The nonce is: '{}'", format_bytes(&summary.nonce))?;
    out.flush()
}

/// Render bytes as space-separated decimals in brackets, e.g. `[1 2 255]`.
fn format_bytes(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyderive::{PADDING, derive_key_weak};

    fn summary() -> EncryptionSummary {
        let mut nonce = [0u8; NONCE_LEN];
        for (i, b) in nonce.iter_mut().enumerate() {
            *b = i as u8 * 10;
        }
        EncryptionSummary {
            output_len: 51,
            plaintext_len: 11,
            nonce,
            key: derive_key_weak(b"qwerty", PADDING),
        }
    }

    #[test]
    fn test_report_sizes_line() {
        let mut out = Vec::new();
        report(&summary(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "Message encrypted successfully. Total size is 51 bytes, of which 11 bytes is the \
             message, 24 bytes is the nonce and 16 bytes is the overhead."
        );
    }

    #[test]
    fn test_report_key_and_nonce() {
        let mut out = Vec::new();
        report(&summary(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "The encryption key is: 'qwerty«super jumpy fox jumps al'"
        );
        assert_eq!(
            lines[2],
            "The nonce is: '[0 10 20 30 40 50 60 70 80 90 100 110 120 130 140 150 160 170 180 \
             190 200 210 220 230]'"
        );
    }

    #[test]
    fn test_report_writes_raw_key_bytes() {
        let mut s = summary();
        s.key = derive_key_weak(&[0xffu8; 32], PADDING);

        let mut out = Vec::new();
        report(&s, &mut out).unwrap();

        let prefix = b"The encryption key is: '";
        let start = out
            .windows(prefix.len())
            .position(|w| w == prefix)
            .unwrap()
            + prefix.len();
        assert_eq!(&out[start..start + 32], &[0xffu8; 32]);
        assert_eq!(out[start + 32], b'\'');
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[]), "[]");
        assert_eq!(format_bytes(&[1, 2, 255]), "[1 2 255]");
    }
}
