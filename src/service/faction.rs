//! Faction configuration: the `/setfaction` command and the chat setup path.

use crate::data::GateStore;
use crate::error::AppError;

/// What the chat listener should do with a guild message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupMessageOutcome {
    /// Not a setup message; the listener stays silent.
    Ignored,
    /// Faction saved from the message content.
    Accepted(String),
    /// Sent in the join channel while unset, but not by an administrator.
    NotAdmin,
}

/// Chat message as seen by the setup listener.
pub struct SetupMessage<'m> {
    pub channel_name: &'m str,
    pub author_is_admin: bool,
    pub content: &'m str,
}

pub struct FactionService<'a> {
    store: &'a dyn GateStore,
}

impl<'a> FactionService<'a> {
    pub fn new(store: &'a dyn GateStore) -> Self {
        Self { store }
    }

    /// Replaces the enforced faction.
    ///
    /// # Returns
    /// - `Ok(String)` - The trimmed name that was stored
    /// - `Err(AppError::BadRequest)` - The name is blank
    pub async fn set_faction(&self, name: &str) -> Result<String, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "❌ The faction name cannot be empty.".to_string(),
            ));
        }

        self.store.write_faction(name).await?;
        tracing::info!("Faction name set to '{}'", name);

        Ok(name.to_string())
    }

    /// Handles a guild chat message while the faction might still be unset.
    ///
    /// Only acts when no faction is configured and the message was posted in
    /// `join_channel`. Administrators set the faction with the message
    /// content; anyone else is told they cannot.
    pub async fn handle_setup_message(
        &self,
        message: SetupMessage<'_>,
        join_channel: &str,
    ) -> Result<SetupMessageOutcome, AppError> {
        if message.channel_name != join_channel {
            return Ok(SetupMessageOutcome::Ignored);
        }

        if self.store.read_faction().await?.is_some() {
            return Ok(SetupMessageOutcome::Ignored);
        }

        if !message.author_is_admin {
            return Ok(SetupMessageOutcome::NotAdmin);
        }

        if message.content.trim().is_empty() {
            return Ok(SetupMessageOutcome::Ignored);
        }

        let faction = self.set_faction(message.content).await?;

        Ok(SetupMessageOutcome::Accepted(faction))
    }
}
