//! Torn City API access.
//!
//! `TornApi` is the seam the verification workflow depends on; `TornClient`
//! implements it over reqwest. Every call goes through a shared `RateGate`.

pub mod client;
pub mod rate_gate;

use async_trait::async_trait;

use crate::error::verification::TornApiError;
use crate::model::torn::{BasicProfile, Profile};

pub use client::TornClient;
pub use rate_gate::RateGate;

#[async_trait]
pub trait TornApi: Send + Sync {
    /// Resolves the player behind `api_key` via the basic selection.
    ///
    /// # Returns
    /// - `Ok(BasicProfile)` - Key accepted and a player id was present
    /// - `Err(TornApiError::InvalidCredential)` - No player id in the response
    /// - `Err(TornApiError::Unavailable)` - Transport, status or decode failure
    async fn fetch_basic_profile(&self, api_key: &str) -> Result<BasicProfile, TornApiError>;

    /// Fetches the profile selection of `player_id` using `api_key`.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile decoded; `faction` may still be absent
    /// - `Err(TornApiError::Unavailable)` - Any failure, including error bodies
    async fn fetch_full_profile(
        &self,
        player_id: u64,
        api_key: &str,
    ) -> Result<Profile, TornApiError>;
}
