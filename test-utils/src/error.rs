use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or seed file could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Seed credentials could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
