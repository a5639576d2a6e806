use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with a private directory for store files.
///
/// The directory and everything in it is removed when the context is dropped,
/// so keep the context alive for as long as the paths are in use.
pub struct TestContext {
    /// Temporary directory owning the store files.
    pub dir: TempDir,

    /// Path of the faction name file. Only exists if seeded.
    pub faction_path: PathBuf,

    /// Path of the credential JSON file. Only exists if seeded.
    pub credentials_path: PathBuf,
}

impl TestContext {
    /// Creates a context over a fresh, empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with paths pointing at not-yet-existing files
    /// - `Err(std::io::Error)` - Temporary directory could not be created
    pub fn new() -> Result<Self, std::io::Error> {
        let dir = tempfile::tempdir()?;
        let faction_path = dir.path().join("faction.txt");
        let credentials_path = dir.path().join("api_keys.json");

        Ok(Self {
            dir,
            faction_path,
            credentials_path,
        })
    }

    /// Reads the credential file back as raw text.
    pub async fn credentials_raw(&self) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(&self.credentials_path).await
    }

    /// Reads the faction file back as raw text.
    pub async fn faction_raw(&self) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(&self.faction_path).await
    }
}
