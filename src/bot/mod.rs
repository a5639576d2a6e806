//! Discord bot: gateway events, slash commands and the serenity adapters.
//!
//! The handler translates gateway events into calls on the platform-agnostic
//! services; `discord` implements the service traits over Serenity's HTTP
//! client.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and role information
//! - `GUILD_MEMBERS` - Member lookups for role changes (privileged intent)
//! - `GUILD_MESSAGES` - The chat path for setting the faction
//! - `DIRECT_MESSAGES` - Receiving the API key reply during `/join`
//! - `MESSAGE_CONTENT` - Reading the text of those messages (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal
//! for the bot application.

pub mod command;
pub mod discord;
pub mod handler;
pub mod start;
