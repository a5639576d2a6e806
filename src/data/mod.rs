//! Persistence layer for the enforced faction and bound API keys.
//!
//! The rest of the bot depends only on the `GateStore` trait, never on file
//! paths. `FileStore` is the production implementation; `MemoryStore` backs
//! the workflow tests.

pub mod file;
#[cfg(test)]
pub mod memory;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::storage::StorageError;

pub use file::FileStore;

/// Discord account id -> Torn API key.
pub type CredentialMap = BTreeMap<String, String>;

/// Durable key/value storage used by the workflow.
///
/// Writes are full replacements: `save_credential` and `delete_credential`
/// read the whole map, modify it and write it back before returning, so a
/// change is durable as soon as the call succeeds.
#[async_trait]
pub trait GateStore: Send + Sync {
    /// Returns the enforced faction name, or `None` when unset.
    async fn read_faction(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the enforced faction name with `name` trimmed.
    async fn write_faction(&self, name: &str) -> Result<(), StorageError>;

    /// Loads every bound account. Missing storage yields an empty map.
    async fn load_credentials(&self) -> Result<CredentialMap, StorageError>;

    /// Binds `api_key` to `account_id`, replacing any previous key.
    async fn save_credential(&self, account_id: &str, api_key: &str)
        -> Result<(), StorageError>;

    /// Unbinds `account_id`. Returns whether an entry was removed.
    async fn delete_credential(&self, account_id: &str) -> Result<bool, StorageError>;
}
