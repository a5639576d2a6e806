use super::*;
use crate::error::verification::VerificationError;
use crate::model::verification::{DEFAULT_POSITION, UNKNOWN_FACTION};

/// Tests verifying a key whose player is in a faction.
///
/// Verifies that the basic profile id is carried into the profile lookup and
/// the faction name and position come back unchanged.
///
/// Expected: Ok with player 42 as Leader of Midgets
#[tokio::test]
async fn verifies_faction_member() {
    let api = Arc::new(FakeTornApi::new().with_player("KEY1", 42, "Alice", "Midgets", "Leader"));
    let verifier = Verifier::new(api.clone());

    let player = verifier.verify("KEY1").await.unwrap();

    assert_eq!(player.player_id, 42);
    assert_eq!(player.player_name, "Alice");
    assert_eq!(player.faction_name, "Midgets");
    assert_eq!(player.faction_position, "Leader");
    assert_eq!(api.calls(), 2);
}

/// Tests verifying a key the basic profile call rejects.
///
/// Expected: Err(InvalidCredential) without a profile lookup
#[tokio::test]
async fn rejects_key_without_player_id() {
    let api = Arc::new(FakeTornApi::new());
    let verifier = Verifier::new(api.clone());

    let result = verifier.verify("bogus").await;

    assert_eq!(result, Err(VerificationError::InvalidCredential));
    assert_eq!(api.profile_calls.load(Ordering::SeqCst), 0);
}

/// Tests a transport failure on the basic profile call.
///
/// Expected: Err(ApiUnavailable)
#[tokio::test]
async fn reports_unavailable_api() {
    let api = FakeTornApi::new().with_basic(
        "KEY1",
        Err(TornApiError::Unavailable("connection reset".to_string())),
    );
    let verifier = Verifier::new(Arc::new(api));

    assert_eq!(
        verifier.verify("KEY1").await,
        Err(VerificationError::ApiUnavailable)
    );
}

/// Tests a failed profile call after the key was accepted.
///
/// Expected: Err(NoFactionData)
#[tokio::test]
async fn failed_profile_call_is_no_faction_data() {
    let api = FakeTornApi::new()
        .with_basic("KEY1", Ok(BasicProfile { player_id: 42 }))
        .with_profile(42, Err(TornApiError::Unavailable("HTTP 500".to_string())));
    let verifier = Verifier::new(Arc::new(api));

    assert_eq!(
        verifier.verify("KEY1").await,
        Err(VerificationError::NoFactionData)
    );
}

/// Tests a profile without a faction object.
///
/// Expected: Err(NoFactionData)
#[tokio::test]
async fn profile_without_faction_is_no_faction_data() {
    let api = FakeTornApi::new()
        .with_basic("KEY1", Ok(BasicProfile { player_id: 42 }))
        .with_profile(
            42,
            Ok(Profile {
                name: Some("Alice".to_string()),
                faction: None,
            }),
        );
    let verifier = Verifier::new(Arc::new(api));

    assert_eq!(
        verifier.verify("KEY1").await,
        Err(VerificationError::NoFactionData)
    );
}

/// Tests a faction object missing its name and position.
///
/// Expected: Ok with faction "None" and position "Member"
#[tokio::test]
async fn fills_missing_faction_fields_with_defaults() {
    let api = FakeTornApi::new()
        .with_basic("KEY1", Ok(BasicProfile { player_id: 42 }))
        .with_profile(
            42,
            Ok(Profile {
                name: Some("Alice".to_string()),
                faction: Some(FactionDto::default()),
            }),
        );
    let verifier = Verifier::new(Arc::new(api));

    let player = verifier.verify("KEY1").await.unwrap();

    assert_eq!(player.faction_name, UNKNOWN_FACTION);
    assert_eq!(player.faction_position, DEFAULT_POSITION);
    assert!(!player.is_in_faction("Midgets"));
}

/// Tests that results are never cached between calls.
///
/// Expected: both calls reach the API
#[tokio::test]
async fn never_caches_results() {
    let api = Arc::new(FakeTornApi::new().with_player("KEY1", 42, "Alice", "Midgets", "Leader"));
    let verifier = Verifier::new(api.clone());

    verifier.verify("KEY1").await.unwrap();
    verifier.verify("KEY1").await.unwrap();

    assert_eq!(api.basic_calls.load(Ordering::SeqCst), 2);
}
