use serenity::all::{CommandInteraction, Context};

use crate::bot::command::{respond_ephemeral, FACTION_NAME_OPTION};
use crate::error::AppError;
use crate::model::notice::{Notice, Tone};
use crate::service::faction::FactionService;
use crate::state::BotState;

/// Handles `/setfaction faction_name:<name>`.
///
/// The command is registered with `ADMINISTRATOR` as its default member
/// permission, but server admins can override that per guild, so the
/// invoker's resolved permissions are checked again here.
pub async fn handle_set_faction(ctx: &Context, state: &BotState, command: &CommandInteraction) {
    let Some(member) = command.member.as_deref() else {
        respond_ephemeral(ctx, command, &Notice::guild_only()).await;
        return;
    };

    let is_admin = member
        .permissions
        .is_some_and(|permissions| permissions.administrator());
    if !is_admin {
        respond_ephemeral(ctx, command, &Notice::admin_only_command()).await;
        return;
    }

    let name = command
        .data
        .options
        .iter()
        .find(|option| option.name == FACTION_NAME_OPTION)
        .and_then(|option| option.value.as_str())
        .unwrap_or_default();

    let notice = match FactionService::new(state.store.as_ref()).set_faction(name).await {
        Ok(faction) => Notice::faction_set(&faction),
        Err(AppError::BadRequest(message)) => Notice::new(Tone::Failure, message),
        Err(e) => {
            tracing::error!("Failed to set faction: {}", e);
            Notice::unexpected_failure()
        }
    };

    respond_ephemeral(ctx, command, &notice).await;
}
