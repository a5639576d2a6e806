//! Chat path for configuring the faction.
//!
//! While no faction is set, an administrator can name it by posting in the
//! join channel. Once set, every message is ignored here.

use serenity::all::{Context, GuildId, Message, UserId};

use crate::bot::discord::{embed::notice_message, permission::is_administrator};
use crate::error::AppError;
use crate::model::notice::Notice;
use crate::service::faction::{FactionService, SetupMessage, SetupMessageOutcome};
use crate::state::BotState;

/// Handles message creation in a channel.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // DMs are consumed by the join flow's collector
    let Some(guild_id) = message.guild_id else {
        return;
    };

    match state.store.read_faction().await {
        Ok(Some(_)) => return,
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to read faction: {}", e);
            return;
        }
    }

    if let Err(e) = process_setup_message(state, &ctx, guild_id, &message).await {
        tracing::error!("Failed to handle setup message: {}", e);
    }
}

async fn process_setup_message(
    state: &BotState,
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
) -> Result<(), AppError> {
    let channel_name = message.channel_id.name(ctx).await?;
    let join_channel = state.config.join_channel_name.as_str();
    if channel_name != join_channel {
        return Ok(());
    }

    let author_is_admin = author_is_administrator(ctx, guild_id, message.author.id).await?;

    let outcome = FactionService::new(state.store.as_ref())
        .handle_setup_message(
            SetupMessage {
                channel_name: &channel_name,
                author_is_admin,
                content: &message.content,
            },
            join_channel,
        )
        .await?;

    let reply = match outcome {
        SetupMessageOutcome::Ignored => return Ok(()),
        SetupMessageOutcome::Accepted(faction) => Notice::faction_set(&faction),
        SetupMessageOutcome::NotAdmin => Notice::admin_only_setup(),
    };

    message
        .channel_id
        .send_message(&ctx.http, notice_message(&reply))
        .await?;

    Ok(())
}

async fn author_is_administrator(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<bool, AppError> {
    let guild = guild_id.to_partial_guild(&ctx.http).await?;
    let member = guild_id.member(&ctx.http, user_id).await?;

    Ok(is_administrator(
        guild_id,
        guild.owner_id,
        user_id,
        &member.roles,
        &guild.roles,
    ))
}
