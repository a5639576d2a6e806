use async_trait::async_trait;
use serenity::all::{GuildId, Http};
use std::sync::Arc;

use crate::bot::discord::{channel::find_text_channel, embed::notice_message};
use crate::error::platform::PlatformError;
use crate::model::notice::Notice;
use crate::service::platform::Announcer;

/// Posts announcements to the guild's join channel.
///
/// The channel is looked up by name on each post so a renamed or recreated
/// channel is picked up without a restart.
pub struct DiscordAnnouncer {
    http: Arc<Http>,
    guild_id: GuildId,
    channel_name: String,
}

impl DiscordAnnouncer {
    pub fn new(http: Arc<Http>, guild_id: GuildId, channel_name: impl Into<String>) -> Self {
        Self {
            http,
            guild_id,
            channel_name: channel_name.into(),
        }
    }
}

#[async_trait]
impl Announcer for DiscordAnnouncer {
    async fn announce(&self, notice: &Notice) -> Result<(), PlatformError> {
        let channel_id = find_text_channel(&self.http, self.guild_id, &self.channel_name)
            .await?
            .ok_or_else(|| PlatformError::NotFound(format!("#{}", self.channel_name)))?;

        channel_id
            .send_message(&self.http, notice_message(notice))
            .await?;

        Ok(())
    }
}
