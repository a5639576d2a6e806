//! Torn API response bodies.
//!
//! Shaped after what `api.torn.com/user` returns for the `basic` and
//! `profile` selections, trimmed to the fields the bot reads plus a few
//! realistic extras so decoding is exercised against unknown fields.

use serde_json::{json, Value};

/// Body of a successful `selections=basic` call.
pub fn basic_profile(player_id: u64, name: &str) -> Value {
    json!({
        "level": 15,
        "gender": "Male",
        "player_id": player_id,
        "name": name,
        "status": {
            "description": "Okay",
            "details": "",
            "state": "Okay",
            "color": "green",
            "until": 0
        }
    })
}

/// Body Torn returns instead of a selection when the request is refused.
///
/// Code 2 is "Incorrect key", code 5 is "Too many requests".
pub fn error_response(code: i64, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "error": message
        }
    })
}

/// Body of a successful `selections=profile` call for a faction member.
pub fn profile(player_id: u64, name: &str, faction_name: &str, position: &str) -> Value {
    json!({
        "rank": "Average Hustler",
        "level": 15,
        "player_id": player_id,
        "name": name,
        "faction": {
            "position": position,
            "faction_id": 9001,
            "days_in_faction": 120,
            "faction_name": faction_name,
            "faction_tag": "MDG"
        },
        "job": {
            "position": "None",
            "company_id": 0,
            "company_name": "None"
        }
    })
}

/// Body of a `selections=profile` call whose `faction` object is absent.
pub fn profile_without_faction(player_id: u64, name: &str) -> Value {
    json!({
        "rank": "Average Hustler",
        "level": 15,
        "player_id": player_id,
        "name": name
    })
}
