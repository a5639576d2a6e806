use async_trait::async_trait;
use serenity::all::{EditMember, EditRole, GuildId, Http, Role, UserId};
use std::sync::Arc;

use crate::bot::discord::embed::notice_message;
use crate::error::platform::PlatformError;
use crate::model::notice::Notice;
use crate::service::platform::GuildMember;

const AUDIT_LOG_REASON: &str = "Torn faction verification";

/// A guild member addressed through the Discord HTTP API.
///
/// Holds only ids; roles and nickname are read fresh on every call.
pub struct DiscordMember {
    http: Arc<Http>,
    guild_id: GuildId,
    user_id: UserId,
}

impl DiscordMember {
    pub fn new(http: Arc<Http>, guild_id: GuildId, user_id: UserId) -> Self {
        Self {
            http,
            guild_id,
            user_id,
        }
    }

    async fn find_role(&self, role_name: &str) -> Result<Option<Role>, PlatformError> {
        let roles = self.guild_id.roles(&self.http).await?;

        Ok(roles.into_values().find(|role| role.name == role_name))
    }
}

#[async_trait]
impl GuildMember for DiscordMember {
    fn account_id(&self) -> String {
        self.user_id.to_string()
    }

    async fn role_names(&self) -> Result<Vec<String>, PlatformError> {
        let member = self.guild_id.member(&self.http, self.user_id).await?;
        let roles = self.guild_id.roles(&self.http).await?;

        Ok(member
            .roles
            .iter()
            .filter_map(|id| roles.get(id).map(|role| role.name.clone()))
            .collect())
    }

    async fn grant_role(&self, role_name: &str) -> Result<bool, PlatformError> {
        let role = match self.find_role(role_name).await? {
            Some(role) => role,
            None => {
                tracing::info!("Creating role '{}' in guild {}", role_name, self.guild_id);
                self.guild_id
                    .create_role(&self.http, EditRole::new().name(role_name))
                    .await?
            }
        };

        let member = self.guild_id.member(&self.http, self.user_id).await?;
        if member.roles.contains(&role.id) {
            return Ok(false);
        }

        self.http
            .add_member_role(self.guild_id, self.user_id, role.id, Some(AUDIT_LOG_REASON))
            .await?;

        Ok(true)
    }

    async fn revoke_role(&self, role_name: &str) -> Result<(), PlatformError> {
        let Some(role) = self.find_role(role_name).await? else {
            return Ok(());
        };

        self.http
            .remove_member_role(self.guild_id, self.user_id, role.id, Some(AUDIT_LOG_REASON))
            .await?;

        Ok(())
    }

    async fn set_nickname(&self, nickname: &str) -> Result<(), PlatformError> {
        self.guild_id
            .edit_member(&self.http, self.user_id, EditMember::new().nickname(nickname))
            .await?;

        Ok(())
    }

    async fn send_direct(&self, notice: &Notice) -> Result<(), PlatformError> {
        let channel = self.user_id.create_dm_channel(&self.http).await?;
        channel
            .id
            .send_message(&self.http, notice_message(notice))
            .await?;

        Ok(())
    }
}
