use std::{
    fs, io,
    path::{Path, PathBuf},
};

use checkout_sdk::TokenStore;
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

/// Session token persisted in a plain file, one token per file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the token. A missing or blank file means no token.
    pub fn load(&self) -> io::Result<Option<SecretString>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| SecretString::from(token.to_string())))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match self.load() {
            Ok(token) => token.map(|t| t.expose_secret().to_string()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read token file");
                None
            }
        }
    }

    fn set(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.trim())
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert_eq!(store.get(), None);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_set_get_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        store.set("  header.payload.signature\n").unwrap();
        assert_eq!(store.get().as_deref(), Some("header.payload.signature"));

        store.clear().unwrap();
        assert_eq!(store.get(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "\n  \n").unwrap();

        assert_eq!(FileTokenStore::new(path).get(), None);
    }

    #[test]
    fn test_unreadable_path_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a token file
        let store = FileTokenStore::new(dir.path());

        assert_eq!(store.get(), None);
        assert!(store.load().is_err());
    }
}
