//! Error types for the bot.
//!
//! Each concern owns a `thiserror` enum in its own module. `AppError` is the
//! top-level type that wraps them; event handlers and the scheduler log it
//! instead of letting it escape, while `main` returns it to abort startup.

pub mod config;
pub mod platform;
pub mod storage;
pub mod verification;

use thiserror::Error;

use crate::error::{config::ConfigError, platform::PlatformError, storage::StorageError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most
/// variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Faction or credential file could not be read, parsed or written.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Discord action failed after classification.
    #[error(transparent)]
    PlatformErr(#[from] PlatformError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised by client construction and command
    /// registration, which are not classified.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Invalid input from a command or chat message.
    ///
    /// # Fields
    /// - Message describing what was invalid, safe to show to the user
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
