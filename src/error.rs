// Crate-wide error type
// One taxonomy covering the key lifecycle and the crypto operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by key management and crypto operations
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A required key half is neither loaded nor supplied per call
    #[error("no {0} key available")]
    NoKey(&'static str),

    /// Key file does not exist
    #[error("key file not found: {0}")]
    NotFound(PathBuf),

    /// Any other filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Requested modulus size below the supported minimum
    #[error("unsupported key length: {0} bits")]
    InvalidKeyLength(usize),

    /// PEM text the underlying library rejects
    #[error("bad key material: {0}")]
    KeyImport(String),

    /// Ciphertext hex that does not decode, or a failed decryption
    #[error("invalid ciphertext")]
    InvalidCiphertext,

    /// Signature hex that does not decode
    #[error("invalid signature encoding")]
    InvalidSignature,

    /// Plaintext exceeds the OAEP capacity of the key
    #[error("message too large: {len} bytes exceeds capacity of {max}")]
    MessageTooLarge { len: usize, max: usize },

    /// Failure inside the RSA backend
    #[error("rsa error: {0}")]
    Backend(#[from] rsa::Error),
}

/// Result type for all fallible operations in this crate
pub type CryptoResult<T> = Result<T, CryptoError>;
