use serde_json::{Map, Value};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with seeded store files.
///
/// Provides a fluent interface for configuring what the faction and credential
/// files contain before a test runs. Files that are never seeded are not
/// created, which is how tests exercise the "missing file" paths.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_faction("Midgets")
///     .with_credential("1001", "key-a")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Raw contents for the faction file.
    faction: Option<String>,

    /// Credentials written as a pretty-printed JSON object.
    credentials: Option<Map<String, Value>>,

    /// Raw contents for the credential file, overriding `credentials`.
    raw_credentials: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with nothing seeded.
    pub fn new() -> Self {
        Self {
            faction: None,
            credentials: None,
            raw_credentials: None,
        }
    }

    /// Seeds the faction file with `contents`, written verbatim.
    pub fn with_faction(mut self, contents: &str) -> Self {
        self.faction = Some(contents.to_string());
        self
    }

    /// Adds a bound account to the credential file.
    ///
    /// # Arguments
    /// - `account_id` - Discord account id used as the JSON key
    /// - `api_key` - Torn API key stored for the account
    pub fn with_credential(mut self, account_id: &str, api_key: &str) -> Self {
        self.credentials
            .get_or_insert_with(Map::new)
            .insert(account_id.to_string(), Value::String(api_key.to_string()));
        self
    }

    /// Seeds the credential file with arbitrary text, e.g. corrupt JSON.
    pub fn with_raw_credentials(mut self, contents: &str) -> Self {
        self.raw_credentials = Some(contents.to_string());
        self
    }

    /// Creates the temporary directory and writes every seeded file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the directory and file paths
    /// - `Err(TestError)` - Directory creation or file write failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(faction) = self.faction {
            tokio::fs::write(&context.faction_path, faction).await?;
        }

        let credentials = match (self.raw_credentials, self.credentials) {
            (Some(raw), _) => Some(raw),
            (None, Some(map)) => Some(serde_json::to_string_pretty(&Value::Object(map))?),
            (None, None) => None,
        };

        if let Some(credentials) = credentials {
            tokio::fs::write(&context.credentials_path, credentials).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
