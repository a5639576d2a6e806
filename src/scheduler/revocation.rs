use chrono::Utc;
use serenity::all::{GuildId, Http};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::discord::DiscordMemberDirectory;
use crate::error::AppError;
use crate::service::reconcile::Reconciler;
use crate::service::revocation::RevocationService;
use crate::state::BotState;

/// Starts the revocation scheduler
///
/// Runs on `CHECK_SCHEDULE` (hourly by default) and re-verifies every bound
/// account of `guild_id`. A tick that fires while the previous cycle is still
/// running is skipped.
///
/// # Arguments
/// - `state`: Shared bot state
/// - `discord_http`: Discord HTTP client for role changes and DMs
/// - `guild_id`: Guild whose members are checked
pub async fn start_scheduler(
    state: BotState,
    discord_http: Arc<Http>,
    guild_id: GuildId,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let running = Arc::new(AtomicBool::new(false));
    let schedule = state.config.check_schedule.clone();

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();
        let running = running.clone();

        Box::pin(async move {
            if running.swap(true, Ordering::SeqCst) {
                tracing::warn!("Previous revocation cycle still running, skipping tick");
                return;
            }

            if let Err(e) = process_revocations(&state, http, guild_id).await {
                tracing::error!("Error processing revocations: {}", e);
            }

            running.store(false, Ordering::SeqCst);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Revocation scheduler started ({})", schedule);

    Ok(())
}

/// Runs one revocation cycle against the Discord guild.
async fn process_revocations(
    state: &BotState,
    discord_http: Arc<Http>,
    guild_id: GuildId,
) -> Result<(), AppError> {
    let started = Utc::now();

    let config = &state.config;
    let directory = DiscordMemberDirectory::new(discord_http, guild_id);
    // Revocation never announces
    let reconciler = Reconciler::new(
        state.store.as_ref(),
        &config.role_scheme,
        None,
        config.update_nicknames,
    );
    let service = RevocationService::new(
        state.store.as_ref(),
        &state.verifier,
        reconciler,
        &directory,
    );

    let Some(report) = service.run_cycle().await? else {
        return Ok(());
    };

    let elapsed = Utc::now() - started;
    tracing::info!(
        "Role verification finished in {}s: {} checked, {} retained, {} revoked, {} failed",
        elapsed.num_seconds(),
        report.checked,
        report.retained,
        report.revoked,
        report.failed
    );

    Ok(())
}
