use serenity::all::{CommandInteraction, Context};

use crate::bot::command::respond_ephemeral;
use crate::bot::discord::{DiscordAnnouncer, DiscordJoinConversation, DiscordMember};
use crate::model::notice::Notice;
use crate::service::join::{JoinFlow, JoinOutcome};
use crate::service::reconcile::Reconciler;
use crate::state::BotState;

/// Handles `/join`.
///
/// Runs the whole join flow on the event task; the DM wait suspends only
/// this invocation, so other users can join concurrently.
pub async fn handle_join(ctx: &Context, state: &BotState, command: &CommandInteraction) {
    let Some(guild_id) = command.guild_id else {
        respond_ephemeral(ctx, command, &Notice::guild_only()).await;
        return;
    };

    let config = &state.config;
    let member = DiscordMember::new(ctx.http.clone(), guild_id, command.user.id);
    let announcer =
        DiscordAnnouncer::new(ctx.http.clone(), guild_id, config.join_channel_name.as_str());
    let reconciler = Reconciler::new(
        state.store.as_ref(),
        &config.role_scheme,
        Some(&announcer),
        config.update_nicknames,
    );
    let flow = JoinFlow::new(
        state.store.as_ref(),
        &state.verifier,
        reconciler,
        config.join_reply_timeout,
    );

    let mut conversation = DiscordJoinConversation::new(ctx.clone(), command.clone());
    let outcome = flow.run(&mut conversation, &member).await;

    match &outcome {
        JoinOutcome::Granted(reconciled) => tracing::info!(
            "{} joined with role {:?}",
            command.user.name,
            reconciled.granted_role
        ),
        JoinOutcome::Failed => tracing::error!("/join failed for {}", command.user.name),
        other => tracing::info!("/join by {} ended: {:?}", command.user.name, other),
    }
}
