//! Sealbox - seal a message with NaCl secretbox under a passphrase-derived key

#![forbid(unsafe_code)]

pub mod error;
pub mod file_ops;
pub mod keyderive;
pub mod nonce;
pub mod report;
pub mod secretcrypt;
