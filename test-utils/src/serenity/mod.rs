//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::Permissions;
//! use test_utils::serenity::create_test_role;
//!
//! let admin = create_test_role(111111111, "Admin", Permissions::ADMINISTRATOR.bits(), 10);
//! let member = create_test_role(222222222, "Faction Member", 0, 1);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects

pub mod role;

pub use role::create_test_role;
