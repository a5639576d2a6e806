//! Ready event handler for bot initialization.
//!
//! Fired after every successful gateway handshake, including reconnects.
//! Command registration and the setup prompt are repeated each time; the
//! revocation scheduler is started only on the first.

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::bot::command::create_commands;
use crate::bot::discord::{channel::find_text_channel, embed::notice_message};
use crate::model::notice::Notice;
use crate::scheduler;
use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("faction membership")));

    match Command::set_global_commands(&ctx.http, create_commands()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    let Some(guild_id) = state
        .config
        .guild_id
        .map(GuildId::new)
        .or_else(|| ready.guilds.first().map(|guild| guild.id))
    else {
        tracing::warn!("Bot is not in any guild; waiting for an invite");
        return;
    };

    prompt_for_faction(state, &ctx, guild_id).await;

    if state.claim_scheduler_start() {
        let scheduler_state = state.clone();
        let http = ctx.http.clone();
        tokio::spawn(async move {
            if let Err(e) =
                scheduler::revocation::start_scheduler(scheduler_state, http, guild_id).await
            {
                tracing::error!("Revocation scheduler error: {}", e);
            }
        });
    }
}

/// Posts the setup prompt in the join channel while no faction is set.
async fn prompt_for_faction(state: &BotState, ctx: &Context, guild_id: GuildId) {
    match state.store.read_faction().await {
        Ok(Some(faction)) => {
            tracing::info!(
                "Enforcing faction '{}' with roles prefixed '{}'",
                faction,
                state.config.role_scheme.prefix()
            );
            return;
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to read faction: {}", e);
            return;
        }
    }

    let join_channel = state.config.join_channel_name.as_str();
    let channel_id = match find_text_channel(&ctx.http, guild_id, join_channel).await {
        Ok(Some(channel_id)) => channel_id,
        Ok(None) => {
            tracing::warn!("No #{} channel found in guild {}", join_channel, guild_id);
            return;
        }
        Err(e) => {
            tracing::error!("Failed to look up #{}: {}", join_channel, e);
            return;
        }
    };

    let prompt = Notice::faction_setup_required(join_channel);
    if let Err(e) = channel_id
        .send_message(&ctx.http, notice_message(&prompt))
        .await
    {
        tracing::error!("Failed to post faction setup prompt: {}", e);
    }
}
