//! Platform-agnostic handles the workflow drives.
//!
//! The Discord adapter in `bot::discord` implements these over Serenity; the
//! service tests implement them in memory.

use async_trait::async_trait;

use crate::error::platform::PlatformError;
use crate::model::notice::Notice;

/// A guild member whose roles, nickname and DMs the bot manages.
#[async_trait]
pub trait GuildMember: Send + Sync {
    /// Account id used as the credential store key.
    fn account_id(&self) -> String;

    /// Names of the roles the member currently holds.
    async fn role_names(&self) -> Result<Vec<String>, PlatformError>;

    /// Grants the role named `role_name`, creating it in the guild if absent.
    ///
    /// Returns whether the member did not already hold the role.
    async fn grant_role(&self, role_name: &str) -> Result<bool, PlatformError>;

    /// Removes the role named `role_name` from the member, if held.
    async fn revoke_role(&self, role_name: &str) -> Result<(), PlatformError>;

    /// Replaces the member's guild nickname.
    async fn set_nickname(&self, nickname: &str) -> Result<(), PlatformError>;

    /// Sends a direct message to the member.
    async fn send_direct(&self, notice: &Notice) -> Result<(), PlatformError>;
}

/// Channel receiving public welcome announcements.
#[async_trait]
pub trait Announcer: Send + Sync {
    async fn announce(&self, notice: &Notice) -> Result<(), PlatformError>;
}

/// Resolves bound account ids to guild members for the revocation cycle.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Returns `None` when the account is no longer in the guild.
    async fn find_member(
        &self,
        account_id: &str,
    ) -> Result<Option<Box<dyn GuildMember>>, PlatformError>;
}

/// The requester side of one `/join` conversation.
#[async_trait]
pub trait JoinConversation: Send {
    /// Answers the command invocation itself, visible only to the requester.
    async fn respond(&mut self, notice: &Notice) -> Result<(), PlatformError>;

    /// Opens the DM channel and sends `prompt` there.
    ///
    /// Replies are buffered from before the prompt is sent, so `next_reply`
    /// sees an answer that arrives ahead of it.
    ///
    /// `PlatformError::PermissionDenied` means the requester does not accept DMs.
    async fn open_direct(&mut self, prompt: &Notice) -> Result<(), PlatformError>;

    /// Sends a message in the DM channel opened by `open_direct`.
    async fn send_direct(&mut self, notice: &Notice) -> Result<(), PlatformError>;

    /// Waits, without bound, for the requester's next DM in that channel.
    ///
    /// The flow bounds this wait with its own timeout and drops the future on
    /// expiry. Returns `None` if the platform stops delivering messages.
    async fn next_reply(&mut self) -> Option<String>;
}
