//! Interactive join flow.
//!
//! `/join` -> DM prompt -> bounded wait for the key -> verification ->
//! reconciliation. Each step that can fail ends the flow with a message to
//! the requester; nothing here may bring down the event handler.

use std::time::Duration;

use crate::data::GateStore;
use crate::error::{platform::PlatformError, verification::VerificationError, AppError};
use crate::model::notice::Notice;
use crate::model::reconcile::ReconciliationOutcome;
use crate::service::platform::{GuildMember, JoinConversation};
use crate::service::reconcile::Reconciler;
use crate::service::verification::Verifier;

/// How a join attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// No faction configured yet.
    FactionUnset,
    /// The requester cannot be messaged directly.
    DirectMessagesClosed,
    /// No reply arrived within the timeout.
    TimedOut,
    /// The key failed verification; nothing was stored.
    Rejected(VerificationError),
    /// The key is valid but the player is in another faction; nothing was stored.
    Denied { player_faction: String },
    /// Credential stored and access granted.
    Granted(ReconciliationOutcome),
    /// Unexpected error; the requester was sent a generic failure notice.
    Failed,
}

pub struct JoinFlow<'a> {
    store: &'a dyn GateStore,
    verifier: &'a Verifier,
    reconciler: Reconciler<'a>,
    reply_timeout: Duration,
}

impl<'a> JoinFlow<'a> {
    /// Creates a new join flow.
    ///
    /// # Arguments
    /// - `store` - Faction and credential storage
    /// - `verifier` - Verification workflow for the submitted key
    /// - `reconciler` - Applies the granting side effects on success
    /// - `reply_timeout` - How long to wait for the key in DMs
    pub fn new(
        store: &'a dyn GateStore,
        verifier: &'a Verifier,
        reconciler: Reconciler<'a>,
        reply_timeout: Duration,
    ) -> Self {
        Self {
            store,
            verifier,
            reconciler,
            reply_timeout,
        }
    }

    /// Runs the whole flow for one requester.
    pub async fn run(
        &self,
        conversation: &mut dyn JoinConversation,
        member: &dyn GuildMember,
    ) -> JoinOutcome {
        let faction = match self.store.read_faction().await {
            Ok(Some(faction)) => faction,
            Ok(None) => {
                respond_or_warn(conversation, &Notice::faction_not_set()).await;
                return JoinOutcome::FactionUnset;
            }
            Err(e) => {
                tracing::error!("Failed to read faction for join: {}", e);
                respond_or_warn(conversation, &Notice::unexpected_failure()).await;
                return JoinOutcome::Failed;
            }
        };

        match conversation.open_direct(&Notice::api_key_prompt()).await {
            Ok(()) => respond_or_warn(conversation, &Notice::check_direct_messages()).await,
            Err(PlatformError::PermissionDenied(reason)) => {
                tracing::debug!("Cannot DM {}: {}", member.account_id(), reason);
                respond_or_warn(conversation, &Notice::direct_messages_closed()).await;
                return JoinOutcome::DirectMessagesClosed;
            }
            Err(e) => {
                tracing::error!("Failed to open DM with {}: {}", member.account_id(), e);
                respond_or_warn(conversation, &Notice::direct_messages_closed()).await;
                return JoinOutcome::DirectMessagesClosed;
            }
        }

        match self.converse(conversation, member, &faction).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Error in join flow for {}: {}", member.account_id(), e);
                if let Err(e) = conversation
                    .send_direct(&Notice::unexpected_failure())
                    .await
                {
                    tracing::warn!("Failed to send failure notice: {}", e);
                }
                JoinOutcome::Failed
            }
        }
    }

    /// Steps after the prompt was delivered: wait, verify, store, grant.
    async fn converse(
        &self,
        conversation: &mut dyn JoinConversation,
        member: &dyn GuildMember,
        faction: &str,
    ) -> Result<JoinOutcome, AppError> {
        let reply = match tokio::time::timeout(self.reply_timeout, conversation.next_reply()).await
        {
            Ok(Some(reply)) => reply,
            Ok(None) | Err(_) => {
                conversation.send_direct(&Notice::reply_timed_out()).await?;
                return Ok(JoinOutcome::TimedOut);
            }
        };

        let api_key = reply.trim();
        let verification = if api_key.is_empty() {
            Err(VerificationError::InvalidCredential)
        } else {
            self.verifier.verify(api_key).await
        };

        let player = match verification {
            Ok(player) => player,
            Err(e) => {
                let notice = match e {
                    VerificationError::NoFactionData => Notice::no_faction_data(),
                    VerificationError::InvalidCredential | VerificationError::ApiUnavailable => {
                        Notice::invalid_api_key()
                    }
                };
                conversation.send_direct(&notice).await?;
                return Ok(JoinOutcome::Rejected(e));
            }
        };

        if !player.is_in_faction(faction) {
            conversation
                .send_direct(&Notice::not_in_faction(faction))
                .await?;
            return Ok(JoinOutcome::Denied {
                player_faction: player.faction_name,
            });
        }

        self.store
            .save_credential(&member.account_id(), api_key)
            .await?;
        tracing::info!(
            "Verified {} [{}] as {} of {} for account {}",
            player.player_name,
            player.player_id,
            player.faction_position,
            faction,
            member.account_id()
        );

        match self.reconciler.grant(member, &player).await {
            Ok(outcome) => Ok(JoinOutcome::Granted(outcome)),
            Err(e) => {
                // A failed grant must not leave the account bound without a role.
                if let Err(delete_err) = self
                    .store
                    .delete_credential(&member.account_id())
                    .await
                {
                    tracing::error!(
                        "Failed to remove credential of {} after failed grant: {}",
                        member.account_id(),
                        delete_err
                    );
                }
                Err(e)
            }
        }
    }
}

async fn respond_or_warn(conversation: &mut dyn JoinConversation, notice: &Notice) {
    if let Err(e) = conversation.respond(notice).await {
        tracing::warn!("Failed to respond to join command: {}", e);
    }
}
