//! Periodic re-verification of every bound account.

use crate::data::GateStore;
use crate::error::{verification::VerificationError, AppError};
use crate::model::reconcile::{ReconciliationOutcome, RevocationReason};
use crate::service::platform::MemberDirectory;
use crate::service::reconcile::Reconciler;
use crate::service::verification::Verifier;

/// Result of checking one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    /// Still in the faction; nothing changed.
    Retained,
    /// Access removed and credential deleted.
    Revoked(ReconciliationOutcome),
}

/// Tally of one revocation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub checked: usize,
    pub retained: usize,
    pub revoked: usize,
    pub failed: usize,
}

pub struct RevocationService<'a> {
    store: &'a dyn GateStore,
    verifier: &'a Verifier,
    reconciler: Reconciler<'a>,
    directory: &'a dyn MemberDirectory,
}

impl<'a> RevocationService<'a> {
    pub fn new(
        store: &'a dyn GateStore,
        verifier: &'a Verifier,
        reconciler: Reconciler<'a>,
        directory: &'a dyn MemberDirectory,
    ) -> Self {
        Self {
            store,
            verifier,
            reconciler,
            directory,
        }
    }

    /// Re-verifies every bound account once.
    ///
    /// The credential map is loaded a single time up front, so entries this
    /// cycle deletes are never revisited. Accounts are processed one after
    /// another; a failure on one is logged and counted without aborting the
    /// rest.
    ///
    /// # Returns
    /// - `Ok(None)` - No faction configured, cycle skipped
    /// - `Ok(Some(CycleReport))` - Cycle completed
    /// - `Err(AppError)` - Faction or credentials could not be loaded
    pub async fn run_cycle(&self) -> Result<Option<CycleReport>, AppError> {
        let Some(faction) = self.store.read_faction().await? else {
            tracing::debug!("No faction configured, skipping revocation cycle");
            return Ok(None);
        };

        let snapshot = self.store.load_credentials().await?;
        tracing::info!(
            "Starting role verification of {} accounts for faction '{}'",
            snapshot.len(),
            faction
        );

        let mut report = CycleReport::default();

        for (account_id, api_key) in &snapshot {
            report.checked += 1;

            match self.check_account(account_id, api_key, &faction).await {
                Ok(AccountStatus::Retained) => report.retained += 1,
                Ok(AccountStatus::Revoked(outcome)) => {
                    report.revoked += 1;
                    tracing::info!(
                        "Revoked access of {} (removed roles: {:?})",
                        account_id,
                        outcome.revoked_roles
                    );
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::error!("Error checking {}: {}", account_id, e);
                }
            }
        }

        Ok(Some(report))
    }

    /// Verifies one account and revokes its access if it no longer qualifies.
    ///
    /// Every verification failure revokes, including an unreachable API. The
    /// member can rebind with `/join` once Torn answers again.
    pub async fn check_account(
        &self,
        account_id: &str,
        api_key: &str,
        faction: &str,
    ) -> Result<AccountStatus, AppError> {
        let reason = match self.verifier.verify(api_key).await {
            Ok(player) if player.is_in_faction(faction) => return Ok(AccountStatus::Retained),
            Ok(_) => RevocationReason::LeftFaction {
                faction: faction.to_string(),
            },
            Err(VerificationError::InvalidCredential) => RevocationReason::InvalidCredential,
            Err(VerificationError::NoFactionData) => RevocationReason::FactionUnreadable,
            Err(VerificationError::ApiUnavailable) => {
                tracing::warn!("Torn API unavailable for {}, revoking access", account_id);
                RevocationReason::VerificationFailed
            }
        };

        let member = self.directory.find_member(account_id).await?;
        if member.is_none() {
            tracing::info!("{} has left the guild, removing credential only", account_id);
        }

        let outcome = self
            .reconciler
            .revoke(member.as_deref(), account_id, &reason)
            .await?;

        Ok(AccountStatus::Revoked(outcome))
    }
}
