// Session facade
// One owned key pair plus the file locations it loads from and saves to

use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use crate::crypto::{self, PrivateKey, PublicKey, DEFAULT_KEY_LENGTH};
use crate::error::{CryptoError, CryptoResult};
use crate::util::file_ops;

/// Default file name for the public key half
pub const PUBLIC_KEY_FILE: &str = "public.pem";

/// Default file name for the private key half
pub const PRIVATE_KEY_FILE: &str = "private.pem";

/// Where a session's key files live
#[derive(Debug, Clone)]
pub struct KeyLocation {
    pub directory: PathBuf,
    pub public_name: String,
    pub private_name: String,
}

impl KeyLocation {
    /// Key files under `directory` with the default file names
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            public_name: PUBLIC_KEY_FILE.to_string(),
            private_name: PRIVATE_KEY_FILE.to_string(),
        }
    }

    pub fn with_names(mut self, public_name: &str, private_name: &str) -> Self {
        self.public_name = public_name.to_string();
        self.private_name = private_name.to_string();
        self
    }
}

impl Default for KeyLocation {
    /// The directory of the running executable, or `.` when unavailable
    fn default() -> Self {
        let directory = env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(directory)
    }
}

/// RSA facade owning at most one key pair at a time.
///
/// Both key halves start empty; [`generate_keys`](Self::generate_keys) or
/// [`load_keys`](Self::load_keys) populates them, and either call replaces
/// the held pair wholesale. Each message operation can alternatively take
/// a per-call PEM override, which is imported on the spot and never
/// stored.
///
/// The session does no internal locking; callers using it from several
/// threads must serialize access themselves.
pub struct RsaSession {
    location: KeyLocation,
    key_length: usize,
    public_key: Option<PublicKey>,
    private_key: Option<PrivateKey>,
}

impl Default for RsaSession {
    fn default() -> Self {
        Self::new(KeyLocation::default(), DEFAULT_KEY_LENGTH)
    }
}

impl RsaSession {
    /// A session with no keys loaded. `key_length` is the modulus size
    /// used by [`generate_keys`](Self::generate_keys).
    pub fn new(location: KeyLocation, key_length: usize) -> Self {
        Self {
            location,
            key_length,
            public_key: None,
            private_key: None,
        }
    }

    pub fn location(&self) -> &KeyLocation {
        &self.location
    }

    /// PEM text of the held public key, if any
    pub fn public_key_pem(&self) -> Option<&str> {
        self.public_key.as_ref().map(PublicKey::as_pem)
    }

    /// PEM text of the held private key, if any
    pub fn private_key_pem(&self) -> Option<&str> {
        self.private_key.as_ref().map(PrivateKey::as_pem)
    }

    /// Generate a fresh key pair of the configured length.
    ///
    /// WARNING: replaces the key pair held in memory; a previously held
    /// pair that was never saved is gone. Files on disk are only touched
    /// by an explicit [`save_keys`](Self::save_keys).
    pub fn generate_keys(&mut self) -> CryptoResult<()> {
        let pair = crypto::generate_keypair(self.key_length)?;
        self.public_key = Some(pair.public);
        self.private_key = Some(pair.private);
        Ok(())
    }

    /// Load and import both configured key files.
    ///
    /// WARNING: replaces the key pair held in memory. Both files are read
    /// and imported before either half is installed, so a missing or
    /// malformed file leaves the session unchanged. Malformed PEM fails
    /// here with [`CryptoError::KeyImport`], not later inside a message
    /// operation.
    pub fn load_keys(&mut self) -> CryptoResult<()> {
        let public_pem =
            file_ops::read_key_file(&self.location.directory, &self.location.public_name)?;
        let private_pem =
            file_ops::read_key_file(&self.location.directory, &self.location.private_name)?;

        let public = PublicKey::from_pem(&public_pem)?;
        let private = PrivateKey::from_pem(&private_pem)?;

        log::debug!(
            "loaded key pair from {}",
            self.location.directory.display()
        );

        self.public_key = Some(public);
        self.private_key = Some(private);
        Ok(())
    }

    /// Read one named key file without touching session state.
    ///
    /// `directory` overrides the configured location when given.
    pub fn load_key(&self, name: &str, directory: Option<&Path>) -> CryptoResult<String> {
        let dir = directory.unwrap_or(&self.location.directory);
        file_ops::read_key_file(dir, name)
    }

    /// Save both held keys under the configured directory and file names
    pub fn save_keys(&self) -> CryptoResult<()> {
        self.save_keys_to(
            &self.location.directory,
            &self.location.public_name,
            &self.location.private_name,
        )
    }

    /// Save both held keys under the given directory and file names,
    /// creating or truncating the files. Fails with
    /// [`CryptoError::NoKey`] if either half is missing.
    pub fn save_keys_to(
        &self,
        directory: &Path,
        public_name: &str,
        private_name: &str,
    ) -> CryptoResult<()> {
        let public = self.public_key.as_ref().ok_or(CryptoError::NoKey("public"))?;
        let private = self
            .private_key
            .as_ref()
            .ok_or(CryptoError::NoKey("private"))?;

        file_ops::write_key_file(directory, public_name, public.as_pem())?;
        file_ops::write_key_file(directory, private_name, private.as_pem())?;

        log::debug!("saved key pair to {}", directory.display());
        Ok(())
    }

    /// Encrypt a message with the override key or the held public key.
    /// Returns the ciphertext as lowercase hex.
    pub fn encrypt(&self, message: &str, public_pem: Option<&str>) -> CryptoResult<String> {
        let key = self.resolve_public(public_pem)?;
        crypto::encrypt(message, &key)
    }

    /// Decrypt a hex ciphertext with the override key or the held private
    /// key
    pub fn decrypt(&self, hex_ciphertext: &str, private_pem: Option<&str>) -> CryptoResult<String> {
        let key = self.resolve_private(private_pem)?;
        crypto::decrypt(hex_ciphertext, &key)
    }

    /// Sign a message with the override key or the held private key.
    /// Returns the signature as lowercase hex.
    pub fn sign(&self, message: &str, private_pem: Option<&str>) -> CryptoResult<String> {
        let key = self.resolve_private(private_pem)?;
        crypto::sign(message, &key)
    }

    /// Verify a hex signature with the override key or the held public
    /// key. A mismatch is `Ok(false)`, not an error.
    pub fn verify_sign(
        &self,
        message: &str,
        signature_hex: &str,
        public_pem: Option<&str>,
    ) -> CryptoResult<bool> {
        let key = self.resolve_public(public_pem)?;
        crypto::verify(message, signature_hex, &key)
    }

    fn resolve_public<'a>(&'a self, pem: Option<&str>) -> CryptoResult<Cow<'a, PublicKey>> {
        match pem {
            Some(text) => Ok(Cow::Owned(PublicKey::from_pem(text)?)),
            None => self
                .public_key
                .as_ref()
                .map(Cow::Borrowed)
                .ok_or(CryptoError::NoKey("public")),
        }
    }

    fn resolve_private<'a>(&'a self, pem: Option<&str>) -> CryptoResult<Cow<'a, PrivateKey>> {
        match pem {
            Some(text) => Ok(Cow::Owned(PrivateKey::from_pem(text)?)),
            None => self
                .private_key
                .as_ref()
                .map(Cow::Borrowed)
                .ok_or(CryptoError::NoKey("private")),
        }
    }
}
