// Message encryption
// RSA-OAEP over SHA-256, hex-encoded at the text boundary

use rsa::Oaep;
use sha2::{Digest, Sha256};

use super::keys::PublicKey;
use crate::error::{CryptoError, CryptoResult};

/// Largest plaintext, in bytes, the given key can encrypt.
/// OAEP with SHA-256 spends `2 * 32 + 2` bytes of the modulus on padding.
pub fn max_message_len(public_key: &PublicKey) -> usize {
    public_key
        .modulus_bytes()
        .saturating_sub(2 * Sha256::output_size() + 2)
}

/// Encrypt a message for the holder of the matching private key.
///
/// OAEP is randomized: two calls with the same message produce different
/// ciphertexts, both of which decrypt to the message. Returns the
/// ciphertext as lowercase hex. Messages over [`max_message_len`] fail
/// with [`CryptoError::MessageTooLarge`].
pub fn encrypt(message: &str, public_key: &PublicKey) -> CryptoResult<String> {
    let max = max_message_len(public_key);
    if message.len() > max {
        return Err(CryptoError::MessageTooLarge {
            len: message.len(),
            max,
        });
    }

    let mut rng = rand::thread_rng();
    let ciphertext = public_key
        .inner()
        .encrypt(&mut rng, Oaep::new::<Sha256>(), message.as_bytes())?;

    Ok(hex::encode(ciphertext))
}
