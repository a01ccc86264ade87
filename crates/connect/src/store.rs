//! File-backed persistence for the preferred display currency.
//!
//! Stand-in for the browser's local storage: one small file holding the
//! last-known preferred currency code. Read when the settings store is
//! unreachable; written on every successful preference change.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use hanoibound_core::currency::PreferenceStoreTrait;
use hanoibound_core::errors::{Error, Result};

/// File name of the single stored key.
const PREFERENCE_FILE: &str = "preferred_currency";

pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Creates a store rooted at the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(PREFERENCE_FILE),
        }
    }
}

impl PreferenceStoreTrait for FilePreferenceStore {
    fn preferred_currency(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(value) => {
                let value = value.trim();
                if value.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(value.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Store(e.to_string())),
        }
    }

    fn set_preferred_currency(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Store(e.to_string()))?;
        }
        fs::write(&self.path, code).map_err(|e| Error::Store(e.to_string()))?;
        debug!("Stored preferred currency {}", code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        assert_eq!(store.preferred_currency().unwrap(), None);
    }

    #[test]
    fn test_round_trips_the_stored_code() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());

        store.set_preferred_currency("EUR").unwrap();
        assert_eq!(store.preferred_currency().unwrap().as_deref(), Some("EUR"));

        store.set_preferred_currency("VND").unwrap();
        assert_eq!(store.preferred_currency().unwrap().as_deref(), Some("VND"));
    }

    #[test]
    fn test_blank_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());

        fs::write(dir.path().join(PREFERENCE_FILE), "  \n").unwrap();
        assert_eq!(store.preferred_currency().unwrap(), None);
    }

    #[test]
    fn test_creates_the_data_directory_on_first_write() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("hanoibound");
        let store = FilePreferenceStore::new(&nested);

        store.set_preferred_currency("USD").unwrap();
        assert_eq!(store.preferred_currency().unwrap().as_deref(), Some("USD"));
    }
}
