//! Verification workflow: API key -> current faction and position.

use std::sync::Arc;

use crate::error::verification::{TornApiError, VerificationError};
use crate::model::verification::{
    VerificationResult, VerifiedPlayer, DEFAULT_POSITION, UNKNOWN_FACTION, UNKNOWN_PLAYER,
};
use crate::service::torn::TornApi;

/// Runs the two-call verification against the Torn API.
///
/// No retries: a single failed call is final for the invocation, and the
/// caller decides whether to try again later.
#[derive(Clone)]
pub struct Verifier {
    api: Arc<dyn TornApi>,
}

impl Verifier {
    pub fn new(api: Arc<dyn TornApi>) -> Self {
        Self { api }
    }

    /// Verifies `api_key`.
    ///
    /// # Returns
    /// - `Ok(VerifiedPlayer)` - Faction defaults to `"None"`, position to `"Member"`
    /// - `Err(InvalidCredential)` - Basic profile had no player id
    /// - `Err(ApiUnavailable)` - Basic profile call failed in transport
    /// - `Err(NoFactionData)` - Profile call failed or carried no faction object
    pub async fn verify(&self, api_key: &str) -> VerificationResult {
        let basic = self
            .api
            .fetch_basic_profile(api_key)
            .await
            .map_err(|e| match e {
                TornApiError::InvalidCredential => VerificationError::InvalidCredential,
                TornApiError::Unavailable(_) => VerificationError::ApiUnavailable,
            })?;

        let profile = self
            .api
            .fetch_full_profile(basic.player_id, api_key)
            .await
            .map_err(|_| VerificationError::NoFactionData)?;

        let faction = profile.faction.ok_or(VerificationError::NoFactionData)?;

        Ok(VerifiedPlayer {
            player_id: basic.player_id,
            player_name: profile
                .name
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
            faction_name: faction
                .faction_name
                .unwrap_or_else(|| UNKNOWN_FACTION.to_string()),
            faction_position: faction
                .position
                .unwrap_or_else(|| DEFAULT_POSITION.to_string()),
        })
    }
}
