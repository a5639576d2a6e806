use serenity::all::{Context, Interaction};

use crate::bot::command::{
    join::handle_join, set_faction::handle_set_faction, JOIN, SET_FACTION,
};
use crate::state::BotState;

/// Dispatches slash commands to their handlers.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!("/{} invoked by {}", command.data.name, command.user.name);

    match command.data.name.as_str() {
        JOIN => handle_join(&ctx, state, &command).await,
        SET_FACTION => handle_set_faction(&ctx, state, &command).await,
        other => tracing::warn!("Received unknown command /{}", other),
    }
}
