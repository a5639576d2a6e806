//! Business logic of the faction gate.
//!
//! Everything here is platform-agnostic: Discord is reached only through the
//! traits in `platform`, the Torn API only through `torn::TornApi` and storage
//! only through `data::GateStore`.
//!
//! - `torn` - Torn API client and rate gate
//! - `verification` - API key -> faction and position
//! - `reconcile` - Grant and revoke side effects
//! - `join` - Interactive `/join` conversation
//! - `revocation` - Periodic re-verification cycle
//! - `faction` - Faction configuration

pub mod faction;
pub mod join;
pub mod platform;
pub mod reconcile;
pub mod revocation;
pub mod torn;
pub mod verification;

#[cfg(test)]
mod test;
