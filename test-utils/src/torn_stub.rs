//! Local stand-in for the Torn API.
//!
//! `TornStub` serves the two `user` endpoints the bot calls from an axum
//! router bound to an ephemeral localhost port. Responses are looked up by
//! API key (basic selection) and by player id (profile selection); unknown
//! keys get Torn's "Incorrect key" error body.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::factory::torn::error_response;

/// Canned response for one route.
#[derive(Clone)]
pub enum StubResponse {
    /// 200 with the given JSON body.
    Json(Value),
    /// Bare status code with an empty body.
    Status(u16),
}

#[derive(Default)]
struct StubState {
    basic: HashMap<String, StubResponse>,
    profile: HashMap<u64, StubResponse>,
    delay: Option<Duration>,
    hits: AtomicUsize,
}

/// Builder for a stub server.
#[derive(Default)]
pub struct TornStubBuilder {
    state: StubState,
}

impl TornStubBuilder {
    /// Answers `selections=basic` for `api_key`.
    pub fn basic(mut self, api_key: &str, response: StubResponse) -> Self {
        self.state.basic.insert(api_key.to_string(), response);
        self
    }

    /// Answers `user/{player_id}?selections=profile`.
    pub fn profile(mut self, player_id: u64, response: StubResponse) -> Self {
        self.state.profile.insert(player_id, response);
        self
    }

    /// Delays every response, for exercising client timeouts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.state.delay = Some(delay);
        self
    }

    /// Binds to `127.0.0.1:0` and serves in a background task.
    ///
    /// # Panics
    /// - If the listener cannot be bound (indicates a broken test environment)
    pub async fn start(self) -> TornStub {
        let state = Arc::new(self.state);

        let router = Router::new()
            .route("/user/", get(basic_handler))
            .route("/user/{player_id}", get(profile_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind Torn stub listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read Torn stub address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        TornStub {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

/// Running stub server. Stops when the test runtime shuts down.
pub struct TornStub {
    /// Base URL to hand to the client, without a trailing slash.
    pub base_url: String,
    state: Arc<StubState>,
}

impl TornStub {
    pub fn builder() -> TornStubBuilder {
        TornStubBuilder::default()
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

async fn respond(state: &StubState, response: Option<&StubResponse>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    match response {
        Some(StubResponse::Json(body)) => Json(body.clone()).into_response(),
        Some(StubResponse::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        None => Json(error_response(2, "Incorrect key")).into_response(),
    }
}

async fn basic_handler(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let response = query.get("key").and_then(|key| state.basic.get(key));
    respond(&state, response).await
}

async fn profile_handler(
    State(state): State<Arc<StubState>>,
    Path(player_id): Path<u64>,
) -> Response {
    let response = state.profile.get(&player_id);
    respond(&state, response).await
}
