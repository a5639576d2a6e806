use async_trait::async_trait;
use std::sync::Mutex;

use crate::data::{CredentialMap, GateStore};
use crate::error::storage::StorageError;

/// In-memory `GateStore` for workflow tests.
#[derive(Default)]
pub struct MemoryStore {
    faction: Mutex<Option<String>>,
    credentials: Mutex<CredentialMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faction(self, faction: &str) -> Self {
        *self.faction.lock().unwrap() = Some(faction.to_string());
        self
    }

    pub fn with_credential(self, account_id: &str, api_key: &str) -> Self {
        self.credentials
            .lock()
            .unwrap()
            .insert(account_id.to_string(), api_key.to_string());
        self
    }
}

#[async_trait]
impl GateStore for MemoryStore {
    async fn read_faction(&self) -> Result<Option<String>, StorageError> {
        Ok(self.faction.lock().unwrap().clone())
    }

    async fn write_faction(&self, name: &str) -> Result<(), StorageError> {
        *self.faction.lock().unwrap() = Some(name.trim().to_string());
        Ok(())
    }

    async fn load_credentials(&self) -> Result<CredentialMap, StorageError> {
        Ok(self.credentials.lock().unwrap().clone())
    }

    async fn save_credential(
        &self,
        account_id: &str,
        api_key: &str,
    ) -> Result<(), StorageError> {
        self.credentials
            .lock()
            .unwrap()
            .insert(account_id.to_string(), api_key.to_string());
        Ok(())
    }

    async fn delete_credential(&self, account_id: &str) -> Result<bool, StorageError> {
        Ok(self.credentials.lock().unwrap().remove(account_id).is_some())
    }
}
