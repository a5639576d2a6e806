//! Factories for external API payloads.
//!
//! - `torn` - Response bodies of the Torn API `user` endpoints

pub mod torn;
