// Message signing and verification
// SHA-256 digest of the message, signed with PKCS#1 v1.5

use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use super::keys::{PrivateKey, PublicKey};
use crate::error::{CryptoError, CryptoResult};

/// Sign a message with the private key.
///
/// The SHA-256 digest of the message is what gets signed. Returns the
/// signature as lowercase hex.
pub fn sign(message: &str, private_key: &PrivateKey) -> CryptoResult<String> {
    let digest = Sha256::digest(message.as_bytes());
    let signature = private_key
        .inner()
        .sign(Pkcs1v15Sign::new::<Sha256>(), digest.as_slice())?;
    Ok(hex::encode(signature))
}

/// Check a hex-encoded signature against a message and public key.
///
/// A mismatch (wrong key, tampered message, structurally wrong signature
/// bytes) is the documented `false` return, not an error. Only signature
/// text that is not valid hex fails, with
/// [`CryptoError::InvalidSignature`].
pub fn verify(message: &str, signature_hex: &str, public_key: &PublicKey) -> CryptoResult<bool> {
    let signature = hex::decode(signature_hex).map_err(|_| CryptoError::InvalidSignature)?;
    let digest = Sha256::digest(message.as_bytes());
    Ok(public_key
        .inner()
        .verify(Pkcs1v15Sign::new::<Sha256>(), digest.as_slice(), &signature)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keygen::generate_keypair;
    use crate::crypto::keys::KeyPair;

    fn test_pair() -> KeyPair {
        generate_keypair(1024).unwrap()
    }

    #[test]
    fn test_sign_and_verify() {
        let pair = test_pair();
        let message = "attest this";

        let signature = sign(message, &pair.private).unwrap();
        assert!(verify(message, &signature, &pair.public).unwrap());
    }

    #[test]
    fn test_tampered_message() {
        let pair = test_pair();

        let signature = sign("original", &pair.private).unwrap();
        assert!(!verify("tampered", &signature, &pair.public).unwrap());
    }

    #[test]
    fn test_wrong_key() {
        let pair = test_pair();
        let other = test_pair();

        let signature = sign("original", &pair.private).unwrap();
        assert!(!verify("original", &signature, &other.public).unwrap());
    }

    #[test]
    fn test_signature_not_hex() {
        let pair = test_pair();

        let result = verify("message", "not-hex", &pair.public);
        assert!(matches!(result, Err(CryptoError::InvalidSignature)));
    }

    #[test]
    fn test_hex_but_not_a_signature() {
        let pair = test_pair();

        // valid hex, nonsense signature bytes: a mismatch, not an error
        assert!(!verify("message", "deadbeef", &pair.public).unwrap());
    }
}
