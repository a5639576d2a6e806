use thiserror::Error;

/// Errors returned by the Torn API client.
///
/// The client never raises transport errors to its callers; every failure is
/// folded into one of these two kinds at the point of call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TornApiError {
    /// The key was rejected or the response carried no player identifier.
    #[error("API key was rejected by the Torn API")]
    InvalidCredential,

    /// Network failure, timeout, non-success status or undecodable body.
    #[error("Torn API unavailable: {0}")]
    Unavailable(String),
}

/// Typed failure of a single verification attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    /// Key rejected or malformed.
    #[error("invalid API key")]
    InvalidCredential,

    /// The basic profile call could not reach the Torn API.
    #[error("Torn API unavailable")]
    ApiUnavailable,

    /// Profile fetched (or fetch failed) without the expected faction data.
    #[error("no faction data in profile")]
    NoFactionData,
}
