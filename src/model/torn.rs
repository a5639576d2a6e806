//! Torn API response models.
//!
//! Every field is optional: the API is treated as untrusted and answers with
//! `{"error": {"code": .., "error": ..}}` instead of the requested selection
//! when the key is rejected.

use serde::Deserialize;

/// Error shape returned in place of a selection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TornErrorDto {
    pub code: Option<i64>,
    pub error: Option<String>,
}

/// `user/?selections=basic` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicProfileDto {
    pub player_id: Option<u64>,
    pub name: Option<String>,
    pub error: Option<TornErrorDto>,
}

/// `faction` object inside the profile selection.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FactionDto {
    pub faction_id: Option<u64>,
    pub faction_name: Option<String>,
    pub position: Option<String>,
}

/// `user/{id}?selections=profile` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDto {
    pub player_id: Option<u64>,
    pub name: Option<String>,
    pub faction: Option<FactionDto>,
    pub error: Option<TornErrorDto>,
}

/// Player identity resolved from an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicProfile {
    pub player_id: u64,
}

/// Profile of a player as far as faction gating is concerned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: Option<String>,
    pub faction: Option<FactionDto>,
}

impl From<ProfileDto> for Profile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            name: dto.name,
            faction: dto.faction,
        }
    }
}
