use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{KeyValueStorage, StorageError};

/// Directory-backed key-value storage: one `<key>.json` file per key.
///
/// Writes go to a sibling temp file first and are then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at `{app_data_dir}/bizinvoice`.
    pub fn in_default_location() -> anyhow::Result<Self> {
        Ok(Self::new(default_data_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })?;
        Ok(())
    }
}

/// Resolve `{app_data_dir}/bizinvoice`, falling back to
/// `~/.local/share/bizinvoice` when the platform has no data dir.
fn default_data_dir() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    dir.push("bizinvoice");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("bizinvoice-file-storage-{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn missing_directory_reads_as_empty() {
        let storage = FileStorage::new(scratch_dir());
        assert_eq!(storage.get_item("bizinvoice_invoices").unwrap(), None);
    }

    #[test]
    fn set_replaces_file_atomically() {
        let dir = scratch_dir();
        let storage = FileStorage::new(&dir);

        storage.set_item("bizinvoice_invoices", "[]").unwrap();
        assert!(dir.join("bizinvoice_invoices.json").exists());
        assert!(!dir.join("bizinvoice_invoices.json.tmp").exists());
        assert_eq!(storage.get_item("bizinvoice_invoices").unwrap().as_deref(), Some("[]"));

        storage.set_item("bizinvoice_invoices", "[1]").unwrap();
        assert_eq!(storage.get_item("bizinvoice_invoices").unwrap().as_deref(), Some("[1]"));
        assert!(!dir.join("bizinvoice_invoices.json.tmp").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let storage = FileStorage::new(scratch_dir());
        for key in ["", "../escape", "a/b", ".hidden"] {
            let err = storage.set_item(key, "x").unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
        }
    }
}
