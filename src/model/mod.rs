//! Domain models shared between the workflow and the Discord adapter.
//!
//! - `torn` - Response shapes of the Torn API
//! - `verification` - Outcome of verifying an API key
//! - `role` - Deterministic faction role naming
//! - `notice` - Platform-neutral rich messages
//! - `reconcile` - Record of the side effects applied to a member

pub mod notice;
pub mod reconcile;
pub mod role;
pub mod torn;
pub mod verification;
