use crate::data::{FileStore, GateStore};
use crate::error::storage::StorageError;
use test_utils::{builder::TestBuilder, context::TestContext};


fn store_for(test: &TestContext) -> FileStore {
    FileStore::new(&test.faction_path, &test.credentials_path)
}
