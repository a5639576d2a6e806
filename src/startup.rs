use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::data::{FileStore, GateStore};
use crate::error::AppError;
use crate::service::torn::{RateGate, TornClient};
use crate::service::verification::Verifier;

/// Installs the global `tracing` subscriber.
///
/// Honours `RUST_LOG`; without it everything at `info` and above is printed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for Torn API requests.
///
/// # Arguments
/// - `timeout` - Upper bound for a whole request, connect included
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialised
pub fn setup_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(client)
}

/// Opens the file store and checks that existing credentials are readable.
///
/// A corrupt credential file aborts startup rather than being treated as
/// empty, which would silently unbind every member on the next write.
///
/// # Returns
/// - `Ok(Arc<dyn GateStore>)` - Store ready for use
/// - `Err(AppError::StorageErr)` - Credential file unreadable or corrupt
pub async fn open_store(config: &Config) -> Result<Arc<dyn GateStore>, AppError> {
    let store = FileStore::new(&config.faction_file, &config.credentials_file);

    let credentials = store.load_credentials().await?;
    tracing::info!(
        "Loaded {} bound accounts from {}",
        credentials.len(),
        config.credentials_file.display()
    );

    Ok(Arc::new(store))
}

/// Builds the verification workflow over a rate-gated Torn client.
pub fn setup_verifier(config: &Config, http_client: reqwest::Client) -> Verifier {
    let gate = Arc::new(RateGate::new(config.torn_min_interval));
    tracing::info!(
        "Torn API calls to {} spaced at least {:?} apart",
        config.torn_api_url,
        gate.min_interval()
    );
    let client = TornClient::new(http_client, config.torn_api_url.clone(), gate);

    Verifier::new(Arc::new(client))
}
