//! torn-gate Test Utils
//!
//! Provides shared testing utilities for the torn-gate bot. This crate offers
//! a builder for temporary store directories, factories for Serenity models
//! and Torn API response bodies, and a local stub of the Torn API.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder seeding faction and credential files
//! - **TestContext**: Temporary directory holding the seeded files
//! - **TestError**: Error types that can occur during test setup
//! - **factory::torn**: JSON bodies shaped like Torn API responses
//! - **serenity**: Serenity model factories
//! - **torn_stub::TornStub**: axum server answering like the Torn API
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn reads_seeded_faction() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_faction("Midgets")
//!         .with_credential("1001", "key-a")
//!         .build()
//!         .await?;
//!
//!     let store = FileStore::new(&test.faction_path, &test.credentials_path);
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
pub mod torn_stub;
