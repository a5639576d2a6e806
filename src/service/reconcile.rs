//! Role/channel reconciler.
//!
//! Translates a verification outcome into Discord side effects. Both halves
//! are idempotent: repeating `grant` leaves the member with exactly one
//! faction role, and repeating `revoke` leaves them with none.

use crate::data::GateStore;
use crate::error::AppError;
use crate::model::notice::Notice;
use crate::model::reconcile::{ReconciliationOutcome, RevocationReason};
use crate::model::role::RoleScheme;
use crate::model::verification::VerifiedPlayer;
use crate::service::platform::{Announcer, GuildMember};

pub struct Reconciler<'a> {
    store: &'a dyn GateStore,
    scheme: &'a RoleScheme,
    announcer: Option<&'a dyn Announcer>,
    update_nicknames: bool,
}

impl<'a> Reconciler<'a> {
    /// Creates a new reconciler.
    ///
    /// # Arguments
    /// - `store` - Credential store, used by `revoke`
    /// - `scheme` - Naming scheme of the managed roles
    /// - `announcer` - Join channel for welcome posts, if the guild has one
    /// - `update_nicknames` - Whether `grant` rewrites the member's nickname
    pub fn new(
        store: &'a dyn GateStore,
        scheme: &'a RoleScheme,
        announcer: Option<&'a dyn Announcer>,
        update_nicknames: bool,
    ) -> Self {
        Self {
            store,
            scheme,
            announcer,
            update_nicknames,
        }
    }

    /// Admits a verified faction member.
    ///
    /// Grants the role for the player's position (creating it if needed) and
    /// removes any other faction role left from an earlier position. The
    /// nickname, announcement and welcome DM are best effort and only
    /// recorded in the outcome.
    ///
    /// # Returns
    /// - `Ok(ReconciliationOutcome)` - Role granted, extras as recorded
    /// - `Err(AppError::PlatformErr)` - The role could not be created or granted
    pub async fn grant(
        &self,
        member: &dyn GuildMember,
        player: &VerifiedPlayer,
    ) -> Result<ReconciliationOutcome, AppError> {
        let mut outcome = ReconciliationOutcome::default();

        let role_name = self.scheme.role_for(&player.faction_position);
        member.grant_role(&role_name).await?;
        outcome.granted_role = Some(role_name.clone());

        let stale: Vec<String> = member
            .role_names()
            .await?
            .into_iter()
            .filter(|name| self.scheme.owns(name) && *name != role_name)
            .collect();
        for name in stale {
            match member.revoke_role(&name).await {
                Ok(()) => outcome.revoked_roles.push(name),
                Err(e) => tracing::warn!(
                    "Failed to remove stale role {} from {}: {}",
                    name,
                    member.account_id(),
                    e
                ),
            }
        }

        if self.update_nicknames {
            let nickname = RoleScheme::nickname_for(&player.player_name, player.player_id);
            match member.set_nickname(&nickname).await {
                Ok(()) => outcome.nickname_changed = true,
                Err(e) => tracing::warn!(
                    "Failed to set nickname of {}: {}",
                    member.account_id(),
                    e
                ),
            }
        }

        if let Some(announcer) = self.announcer {
            let notice = Notice::welcome_announcement(&player.player_name, &role_name);
            match announcer.announce(&notice).await {
                Ok(()) => outcome.announced = true,
                Err(e) => tracing::warn!("Failed to post welcome announcement: {}", e),
            }
        }

        match member
            .send_direct(&Notice::welcome_member(&player.player_name))
            .await
        {
            Ok(()) => outcome.member_notified = true,
            Err(e) => tracing::warn!(
                "Failed to send welcome DM to {}: {}",
                member.account_id(),
                e
            ),
        }

        Ok(outcome)
    }

    /// Removes a member's faction access.
    ///
    /// Strips every role owned by the scheme, tells the member why, then
    /// deletes the stored credential so only a new `/join` restores access.
    /// Role and DM failures are logged and do not stop the deletion. `member`
    /// is `None` when the account has left the guild.
    ///
    /// # Returns
    /// - `Ok(ReconciliationOutcome)` - Credential deleted (or already absent)
    /// - `Err(AppError::StorageErr)` - The credential could not be deleted
    pub async fn revoke(
        &self,
        member: Option<&dyn GuildMember>,
        account_id: &str,
        reason: &RevocationReason,
    ) -> Result<ReconciliationOutcome, AppError> {
        let mut outcome = ReconciliationOutcome::default();

        if let Some(member) = member {
            match member.role_names().await {
                Ok(names) => {
                    for name in names.into_iter().filter(|name| self.scheme.owns(name)) {
                        match member.revoke_role(&name).await {
                            Ok(()) => outcome.revoked_roles.push(name),
                            Err(e) => tracing::warn!(
                                "Failed to remove role {} from {}: {}",
                                name,
                                account_id,
                                e
                            ),
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to read roles of {}: {}", account_id, e),
            }

            match member
                .send_direct(&Notice::access_revoked(&reason.describe()))
                .await
            {
                Ok(()) => outcome.member_notified = true,
                Err(e) => tracing::warn!(
                    "Failed to notify {} about revoked access: {}",
                    account_id,
                    e
                ),
            }
        }

        outcome.credential_removed = self.store.delete_credential(account_id).await?;

        Ok(outcome)
    }
}
