use crate::error::verification::VerificationError;

/// Faction name assumed when the profile carries a faction object without a name.
pub const UNKNOWN_FACTION: &str = "None";
/// Position assumed when the profile carries no position.
pub const DEFAULT_POSITION: &str = "Member";
/// Player name assumed when the profile carries no name.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// A player whose key was accepted and whose faction was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPlayer {
    pub player_id: u64,
    pub player_name: String,
    pub faction_name: String,
    pub faction_position: String,
}

impl VerifiedPlayer {
    /// Whether the player belongs to the enforced faction.
    ///
    /// Compared exactly after trimming; Torn faction names are case sensitive.
    pub fn is_in_faction(&self, faction: &str) -> bool {
        self.faction_name.trim() == faction.trim()
    }
}

/// Produced fresh on every verification call; never cached.
pub type VerificationResult = Result<VerifiedPlayer, VerificationError>;
