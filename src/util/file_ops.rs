// File operations for key material
// Wholesale reads and writes of PEM text files

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CryptoError, CryptoResult};

/// Read the full text of the key file at `directory/name`, unmodified.
///
/// A missing file is [`CryptoError::NotFound`]; any other read failure is
/// [`CryptoError::Io`]. No PEM validation happens here - malformed content
/// surfaces at import time.
pub fn read_key_file(directory: &Path, name: &str) -> CryptoResult<String> {
    let path = directory.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CryptoError::NotFound(path)),
        Err(e) => Err(CryptoError::Io(e)),
    }
}

/// Write key text to `directory/name`, creating or truncating the file.
///
/// Not atomic: a failure mid-write leaves the file state undefined and is
/// reported as [`CryptoError::Io`]. The directory must already exist.
pub fn write_key_file(directory: &Path, name: &str, contents: &str) -> CryptoResult<()> {
    fs::write(directory.join(name), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();

        let result = read_key_file(tmp.path(), "nope.pem");
        assert!(matches!(result, Err(CryptoError::NotFound(_))));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("does-not-exist");

        let result = write_key_file(&gone, "key.pem", "data");
        assert!(matches!(result, Err(CryptoError::Io(_))));
    }

    #[test]
    fn test_write_read_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let text = "-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----\n";

        write_key_file(tmp.path(), "key.pem", text).unwrap();
        assert_eq!(read_key_file(tmp.path(), "key.pem").unwrap(), text);
    }

    #[test]
    fn test_write_truncates_existing() {
        let tmp = tempfile::tempdir().unwrap();

        write_key_file(tmp.path(), "key.pem", "a much longer first version").unwrap();
        write_key_file(tmp.path(), "key.pem", "short").unwrap();

        assert_eq!(read_key_file(tmp.path(), "key.pem").unwrap(), "short");
    }
}
