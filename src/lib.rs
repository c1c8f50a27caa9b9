//! RSA facade: generate or load a PEM key pair, then encrypt, decrypt,
//! sign and verify short messages with it.
//!
//! The RSA primitive, padding schemes and PEM codecs come from the
//! [`rsa`] crate; this crate owns the key lifecycle (generation, file
//! persistence, in-memory session state) and the hex text boundary.
//!
//! ```no_run
//! use easy_rsa::{KeyLocation, RsaSession};
//!
//! # fn main() -> easy_rsa::CryptoResult<()> {
//! let mut session = RsaSession::new(KeyLocation::new("keys"), 2048);
//! session.generate_keys()?;
//! session.save_keys()?;
//!
//! let ciphertext = session.encrypt("hello", None)?;
//! assert_eq!(session.decrypt(&ciphertext, None)?, "hello");
//!
//! let signature = session.sign("hello", None)?;
//! assert!(session.verify_sign("hello", &signature, None)?);
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod error;
pub mod session;
pub mod util;

pub use crypto::{
    decrypt, encrypt, generate_keypair, max_message_len, sign, verify, KeyPair, PrivateKey,
    PublicKey, DEFAULT_KEY_LENGTH, MIN_KEY_LENGTH,
};
pub use error::{CryptoError, CryptoResult};
pub use session::{KeyLocation, RsaSession, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
