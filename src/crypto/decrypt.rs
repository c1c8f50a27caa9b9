// Message decryption
// Inverse of encrypt; every failure collapses into InvalidCiphertext

use rsa::Oaep;
use sha2::Sha256;

use super::keys::PrivateKey;
use crate::error::{CryptoError, CryptoResult};

/// Decrypt a hex-encoded OAEP ciphertext back into the original message.
///
/// Bad hex, a failed padding check and non-UTF-8 plaintext all report the
/// same [`CryptoError::InvalidCiphertext`]; callers cannot tell which
/// stage rejected the input.
pub fn decrypt(hex_ciphertext: &str, private_key: &PrivateKey) -> CryptoResult<String> {
    let ciphertext = hex::decode(hex_ciphertext).map_err(|_| CryptoError::InvalidCiphertext)?;
    let plaintext = private_key
        .inner()
        .decrypt(Oaep::new::<Sha256>(), &ciphertext)
        .map_err(|_| CryptoError::InvalidCiphertext)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidCiphertext)
}
