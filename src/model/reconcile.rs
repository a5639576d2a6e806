/// Why a member's faction access is being removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevocationReason {
    /// The stored key was rejected.
    InvalidCredential,
    /// The key resolved to a player but their faction could not be read.
    FactionUnreadable,
    /// The Torn API could not be reached to check the key.
    VerificationFailed,
    /// The player is now in another faction (or none).
    LeftFaction { faction: String },
}

impl RevocationReason {
    /// Plain-language explanation sent to the member.
    pub fn describe(&self) -> String {
        match self {
            Self::InvalidCredential => "Your stored Torn API key is no longer valid.".to_string(),
            Self::FactionUnreadable => {
                "Your faction data could not be read from the Torn API.".to_string()
            }
            Self::VerificationFailed => {
                "Your stored Torn API key could not be checked against the Torn API.".to_string()
            }
            Self::LeftFaction { faction } => {
                format!("You are no longer a member of **{}**.", faction)
            }
        }
    }
}

/// Side effects applied to one member by the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationOutcome {
    /// Role granted, when the member was admitted.
    pub granted_role: Option<String>,
    /// Faction roles removed from the member.
    pub revoked_roles: Vec<String>,
    pub nickname_changed: bool,
    pub announced: bool,
    /// Whether the member's DM was delivered.
    pub member_notified: bool,
    pub credential_removed: bool,
}
