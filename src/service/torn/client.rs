use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::verification::TornApiError;
use crate::model::torn::{BasicProfile, BasicProfileDto, Profile, ProfileDto};
use crate::service::torn::{RateGate, TornApi};

/// reqwest implementation of `TornApi`.
///
/// The request timeout is configured on the `reqwest::Client` (see
/// `startup::setup_reqwest_client`). The API key travels as a query parameter
/// and is stripped from every error before it is logged.
pub struct TornClient {
    http: reqwest::Client,
    base_url: String,
    gate: Arc<RateGate>,
}

impl TornClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client with its timeout already configured
    /// - `base_url` - API root without trailing slash, e.g. `https://api.torn.com`
    /// - `gate` - Rate gate shared by every caller of the Torn API
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, gate: Arc<RateGate>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            gate,
        }
    }

    /// Performs one gated GET and decodes the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        selection: &str,
        api_key: &str,
    ) -> Result<T, TornApiError> {
        let _permit = self.gate.acquire().await;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[("selections", selection), ("key", api_key)])
            .send()
            .await
            .map_err(|e| TornApiError::Unavailable(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TornApiError::Unavailable(format!(
                "{} answered with status {}",
                path, status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TornApiError::Unavailable(e.without_url().to_string()))
    }
}

/// Classifies a basic selection body.
///
/// Anything without a player id is a rejected credential, whether Torn sent
/// its error shape or something unexpected.
pub fn classify_basic(dto: BasicProfileDto) -> Result<BasicProfile, TornApiError> {
    match dto.player_id {
        Some(player_id) => Ok(BasicProfile { player_id }),
        None => {
            if let Some(error) = dto.error {
                tracing::debug!(
                    "Torn API rejected key (code {:?}): {}",
                    error.code,
                    error.error.unwrap_or_default()
                );
            }
            Err(TornApiError::InvalidCredential)
        }
    }
}

/// Classifies a profile selection body. Error bodies count as unavailable.
pub fn classify_profile(dto: ProfileDto) -> Result<Profile, TornApiError> {
    if let Some(error) = dto.error {
        return Err(TornApiError::Unavailable(format!(
            "Torn API error {}: {}",
            error.code.unwrap_or_default(),
            error.error.unwrap_or_default()
        )));
    }

    Ok(Profile::from(dto))
}

#[async_trait]
impl TornApi for TornClient {
    async fn fetch_basic_profile(&self, api_key: &str) -> Result<BasicProfile, TornApiError> {
        let dto = self
            .get::<BasicProfileDto>("/user/", "basic", api_key)
            .await
            .inspect_err(|e| tracing::warn!("Basic profile request failed: {}", e))?;

        classify_basic(dto)
    }

    async fn fetch_full_profile(
        &self,
        player_id: u64,
        api_key: &str,
    ) -> Result<Profile, TornApiError> {
        let path = format!("/user/{}", player_id);

        self.get::<ProfileDto>(&path, "profile", api_key)
            .await
            .and_then(classify_profile)
            .inspect_err(|e| {
                tracing::warn!("Profile request for player {} failed: {}", player_id, e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use test_utils::factory::torn;
    use test_utils::torn_stub::{StubResponse, TornStub};

    fn client_for(stub: &TornStub, timeout: Duration) -> TornClient {
        let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
        TornClient::new(
            http,
            stub.base_url.clone(),
            Arc::new(RateGate::new(Duration::ZERO)),
        )
    }

    /// Tests resolving a player id from a valid key.
    ///
    /// Expected: Ok with the player id from the basic selection
    #[tokio::test]
    async fn fetches_basic_profile() {
        let stub = TornStub::builder()
            .basic("good-key", StubResponse::Json(torn::basic_profile(123, "Bob")))
            .start()
            .await;
        let client = client_for(&stub, Duration::from_secs(5));

        let result = client.fetch_basic_profile("good-key").await;

        assert_eq!(result, Ok(BasicProfile { player_id: 123 }));
    }

    /// Tests that Torn's error body for a bad key is an invalid credential.
    ///
    /// Expected: Err(InvalidCredential)
    #[tokio::test]
    async fn rejects_unknown_key() {
        let stub = TornStub::builder().start().await;
        let client = client_for(&stub, Duration::from_secs(5));

        let result = client.fetch_basic_profile("bad-key").await;

        assert_eq!(result, Err(TornApiError::InvalidCredential));
    }

    /// Tests that a server error on the basic call is not mistaken for a bad key.
    ///
    /// Expected: Err(Unavailable)
    #[tokio::test]
    async fn basic_server_error_is_unavailable() {
        let stub = TornStub::builder()
            .basic("good-key", StubResponse::Status(503))
            .start()
            .await;
        let client = client_for(&stub, Duration::from_secs(5));

        let result = client.fetch_basic_profile("good-key").await;

        assert!(matches!(result, Err(TornApiError::Unavailable(_))));
    }

    /// Tests decoding the faction from a full profile.
    ///
    /// Expected: Ok with name, faction name and position
    #[tokio::test]
    async fn fetches_full_profile() {
        let stub = TornStub::builder()
            .profile(
                123,
                StubResponse::Json(torn::profile(123, "Bob", "Midgets", "Leader")),
            )
            .start()
            .await;
        let client = client_for(&stub, Duration::from_secs(5));

        let profile = client.fetch_full_profile(123, "good-key").await.unwrap();

        assert_eq!(profile.name.as_deref(), Some("Bob"));
        let faction = profile.faction.unwrap();
        assert_eq!(faction.faction_name.as_deref(), Some("Midgets"));
        assert_eq!(faction.position.as_deref(), Some("Leader"));
    }

    /// Tests a profile of a player outside any faction.
    ///
    /// Expected: Ok with no faction, after exactly one request
    #[tokio::test]
    async fn profile_without_faction_decodes() {
        let stub = TornStub::builder()
            .profile(
                123,
                StubResponse::Json(torn::profile_without_faction(123, "Bob")),
            )
            .start()
            .await;
        let client = client_for(&stub, Duration::from_secs(5));

        let profile = client.fetch_full_profile(123, "good-key").await.unwrap();

        assert_eq!(profile.faction, None);
        assert_eq!(stub.hits(), 1);
    }

    /// Tests that non-success statuses on the profile call are swallowed.
    ///
    /// Expected: Err(Unavailable) rather than a panic or transport error
    #[tokio::test]
    async fn profile_server_error_is_unavailable() {
        let stub = TornStub::builder()
            .profile(123, StubResponse::Status(500))
            .start()
            .await;
        let client = client_for(&stub, Duration::from_secs(5));

        let result = client.fetch_full_profile(123, "good-key").await;

        assert!(matches!(result, Err(TornApiError::Unavailable(_))));
    }

    /// Tests that a stalled API is cut off by the request timeout.
    ///
    /// Expected: Err(Unavailable) well before the stub answers
    #[tokio::test]
    async fn stalled_request_times_out() {
        let stub = TornStub::builder()
            .profile(
                123,
                StubResponse::Json(torn::profile(123, "Bob", "Midgets", "Leader")),
            )
            .delay(Duration::from_secs(5))
            .start()
            .await;
        let client = client_for(&stub, Duration::from_millis(100));

        let started = std::time::Instant::now();
        let result = client.fetch_full_profile(123, "good-key").await;

        assert!(matches!(result, Err(TornApiError::Unavailable(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    /// Tests that error messages never carry the API key.
    #[tokio::test]
    async fn errors_do_not_leak_key() {
        let stub = TornStub::builder()
            .delay(Duration::from_secs(5))
            .start()
            .await;
        let client = client_for(&stub, Duration::from_millis(100));

        let Err(TornApiError::Unavailable(message)) =
            client.fetch_basic_profile("secret-key-123").await
        else {
            panic!("expected an unavailable error");
        };

        assert!(!message.contains("secret-key-123"));
    }

    #[test]
    fn profile_error_body_is_unavailable() {
        let dto: ProfileDto =
            serde_json::from_value(torn::error_response(5, "Too many requests")).unwrap();

        assert!(matches!(
            classify_profile(dto),
            Err(TornApiError::Unavailable(_))
        ));
    }

    #[test]
    fn basic_body_without_player_id_is_invalid() {
        let dto: BasicProfileDto = serde_json::from_value(serde_json::json!({
            "name": "Bob"
        }))
        .unwrap();

        assert_eq!(classify_basic(dto), Err(TornApiError::InvalidCredential));
    }
}
