use async_trait::async_trait;
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Message,
    MessageCollector,
};
use serenity::futures::stream::{BoxStream, StreamExt};

use crate::bot::discord::embed::{notice_embed, notice_message};
use crate::error::platform::PlatformError;
use crate::model::notice::Notice;
use crate::service::platform::JoinConversation;

/// One `/join` invocation and the DM channel it opens.
///
/// The first `respond` answers the interaction; later ones are sent as
/// ephemeral followups since an interaction accepts a single response.
/// Replies are collected from the moment the DM channel is opened, so an
/// answer sent before `next_reply` is polled is still delivered.
pub struct DiscordJoinConversation {
    ctx: Context,
    command: CommandInteraction,
    direct_channel: Option<ChannelId>,
    replies: Option<BoxStream<'static, Message>>,
    responded: bool,
}

impl DiscordJoinConversation {
    pub fn new(ctx: Context, command: CommandInteraction) -> Self {
        Self {
            ctx,
            command,
            direct_channel: None,
            replies: None,
            responded: false,
        }
    }
}

#[async_trait]
impl JoinConversation for DiscordJoinConversation {
    async fn respond(&mut self, notice: &Notice) -> Result<(), PlatformError> {
        if self.responded {
            self.command
                .create_followup(
                    &self.ctx.http,
                    CreateInteractionResponseFollowup::new()
                        .embed(notice_embed(notice))
                        .ephemeral(true),
                )
                .await?;
            return Ok(());
        }

        self.command
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .embed(notice_embed(notice))
                        .ephemeral(true),
                ),
            )
            .await?;
        self.responded = true;

        Ok(())
    }

    async fn open_direct(&mut self, prompt: &Notice) -> Result<(), PlatformError> {
        let channel = self.command.user.create_dm_channel(&self.ctx.http).await?;

        // Register the collector before the prompt goes out.
        self.replies = Some(
            MessageCollector::new(&self.ctx.shard)
                .channel_id(channel.id)
                .author_id(self.command.user.id)
                .stream()
                .boxed(),
        );

        channel
            .id
            .send_message(&self.ctx.http, notice_message(prompt))
            .await?;
        self.direct_channel = Some(channel.id);

        Ok(())
    }

    async fn send_direct(&mut self, notice: &Notice) -> Result<(), PlatformError> {
        let channel_id = self
            .direct_channel
            .ok_or_else(|| PlatformError::NotFound("direct message channel".to_string()))?;

        channel_id
            .send_message(&self.ctx.http, notice_message(notice))
            .await?;

        Ok(())
    }

    async fn next_reply(&mut self) -> Option<String> {
        self.replies
            .as_mut()?
            .next()
            .await
            .map(|message| message.content)
    }
}
