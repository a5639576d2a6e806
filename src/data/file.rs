//! File-backed `GateStore`.
//!
//! The faction name is a plain text file; credentials are a pretty-printed
//! JSON object. Both are replaced through a sibling temporary file and a
//! rename, so a crash mid-write leaves the previous version intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::data::{CredentialMap, GateStore};
use crate::error::storage::StorageError;

/// Store backed by two files on disk.
pub struct FileStore {
    faction_path: PathBuf,
    credentials_path: PathBuf,
    /// Serializes read-modify-write cycles on the credential file.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store over the given files. Neither file needs to exist yet.
    ///
    /// # Arguments
    /// - `faction_path` - Plain text file holding the faction name
    /// - `credentials_path` - JSON file mapping account ids to API keys
    pub fn new(faction_path: impl Into<PathBuf>, credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            faction_path: faction_path.into(),
            credentials_path: credentials_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads a file, mapping a missing file to `None`.
    async fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Writes `contents` to a temporary sibling and renames it over `path`.
    async fn replace(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let io_err = |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        };

        tokio::fs::write(&tmp, contents).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, path).await.map_err(io_err)?;

        Ok(())
    }

    async fn read_credentials(&self) -> Result<CredentialMap, StorageError> {
        let Some(contents) = Self::read_optional(&self.credentials_path).await? else {
            return Ok(CredentialMap::new());
        };

        if contents.trim().is_empty() {
            return Ok(CredentialMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.credentials_path.clone(),
            source,
        })
    }

    async fn write_credentials(&self, credentials: &CredentialMap) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(credentials).map_err(StorageError::Serialize)?;
        Self::replace(&self.credentials_path, json.as_bytes()).await
    }
}

#[async_trait]
impl GateStore for FileStore {
    async fn read_faction(&self) -> Result<Option<String>, StorageError> {
        let faction = Self::read_optional(&self.faction_path)
            .await?
            .map(|contents| contents.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(faction)
    }

    async fn write_faction(&self, name: &str) -> Result<(), StorageError> {
        Self::replace(&self.faction_path, name.trim().as_bytes()).await
    }

    async fn load_credentials(&self) -> Result<CredentialMap, StorageError> {
        self.read_credentials().await
    }

    async fn save_credential(
        &self,
        account_id: &str,
        api_key: &str,
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut credentials = self.read_credentials().await?;
        credentials.insert(account_id.to_string(), api_key.to_string());
        self.write_credentials(&credentials).await
    }

    async fn delete_credential(&self, account_id: &str) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut credentials = self.read_credentials().await?;
        if credentials.remove(account_id).is_none() {
            return Ok(false);
        }

        self.write_credentials(&credentials).await?;
        Ok(true)
    }
}
