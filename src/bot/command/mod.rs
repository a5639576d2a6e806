//! Slash commands: `/join` for members, `/setfaction` for administrators.

pub mod join;
pub mod set_faction;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, Permissions,
};

use crate::bot::discord::embed::notice_embed;
use crate::model::notice::Notice;

pub const JOIN: &str = "join";
pub const SET_FACTION: &str = "setfaction";
pub const FACTION_NAME_OPTION: &str = "faction_name";

/// Creates all slash commands for registration.
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(JOIN)
            .description("Verify your Torn faction membership")
            .dm_permission(false),
        CreateCommand::new(SET_FACTION)
            .description("Set the Torn faction name (admin only)")
            .dm_permission(false)
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    FACTION_NAME_OPTION,
                    "Exact name of the Torn faction",
                )
                .required(true),
            ),
    ]
}

/// Answers a command with an embed only the invoker can see.
pub async fn respond_ephemeral(ctx: &Context, command: &CommandInteraction, notice: &Notice) {
    if let Err(e) = command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(notice_embed(notice))
                    .ephemeral(true),
            ),
        )
        .await
    {
        tracing::warn!("Failed to respond to /{}: {}", command.data.name, e);
    }
}
