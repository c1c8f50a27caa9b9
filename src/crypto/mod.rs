// Crypto module - main module file
// Exports key generation, key material and the four message operations

pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod keys;
pub mod sign;

pub use decrypt::decrypt;
pub use encrypt::{encrypt, max_message_len};
pub use keygen::{generate_keypair, DEFAULT_KEY_LENGTH, MIN_KEY_LENGTH};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use sign::{sign, verify};
