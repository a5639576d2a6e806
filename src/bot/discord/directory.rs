use async_trait::async_trait;
use serenity::all::{GuildId, Http, UserId};
use std::sync::Arc;

use crate::bot::discord::DiscordMember;
use crate::error::platform::PlatformError;
use crate::service::platform::{GuildMember, MemberDirectory};

/// Looks up bound accounts among the members of one guild.
pub struct DiscordMemberDirectory {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordMemberDirectory {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl MemberDirectory for DiscordMemberDirectory {
    async fn find_member(
        &self,
        account_id: &str,
    ) -> Result<Option<Box<dyn GuildMember>>, PlatformError> {
        // Snowflakes are never zero; UserId::new panics on it.
        let Some(user_id) = account_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(UserId::new)
        else {
            tracing::warn!("Stored account id '{}' is not a Discord user id", account_id);
            return Ok(None);
        };

        match self.guild_id.member(&self.http, user_id).await {
            Ok(_) => Ok(Some(Box::new(DiscordMember::new(
                self.http.clone(),
                self.guild_id,
                user_id,
            )))),
            Err(e) => match PlatformError::from(e) {
                PlatformError::NotFound(_) => Ok(None),
                other => Err(other),
            },
        }
    }
}
