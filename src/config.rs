use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};
use crate::model::role::RoleScheme;

const DEFAULT_TORN_API_URL: &str = "https://api.torn.com";
const DEFAULT_ROLE_PREFIX: &str = "Faction";
const DEFAULT_JOIN_CHANNEL_NAME: &str = "join";
const DEFAULT_FACTION_FILE: &str = "faction.txt";
const DEFAULT_CREDENTIALS_FILE: &str = "api_keys.json";
/// Top of every hour.
const DEFAULT_CHECK_SCHEDULE: &str = "0 0 * * * *";

pub struct Config {
    pub discord_bot_token: String,
    /// Guild the bot gates. Falls back to the first guild reported on ready.
    pub guild_id: Option<u64>,

    pub role_scheme: RoleScheme,
    pub join_channel_name: String,
    pub update_nicknames: bool,

    pub faction_file: PathBuf,
    pub credentials_file: PathBuf,

    pub torn_api_url: String,
    pub torn_request_timeout: Duration,
    pub torn_min_interval: Duration,

    pub join_reply_timeout: Duration,
    pub check_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Only `DISCORD_BOT_TOKEN` is required; everything else has a default.
    /// A legacy `ROLE_NAME` without `ROLE_PREFIX` names a single fixed role
    /// unless `ROLE_PER_POSITION` says otherwise.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let discord_bot_token = var("DISCORD_BOT_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let (role_prefix, per_position_default) = match (var("ROLE_PREFIX"), var("ROLE_NAME")) {
            (Some(prefix), _) => (prefix, true),
            (None, Some(legacy)) => (legacy, false),
            (None, None) => (DEFAULT_ROLE_PREFIX.to_string(), true),
        };
        let per_position = parse_or(&var, "ROLE_PER_POSITION", per_position_default)?;

        Ok(Self {
            discord_bot_token,
            guild_id: var("GUILD_ID")
                .map(|value| parse_value("GUILD_ID", value))
                .transpose()?,
            role_scheme: RoleScheme::new(role_prefix.trim(), per_position),
            join_channel_name: var("JOIN_CHANNEL_NAME")
                .unwrap_or_else(|| DEFAULT_JOIN_CHANNEL_NAME.to_string()),
            update_nicknames: parse_or(&var, "UPDATE_NICKNAMES", true)?,
            faction_file: var("FACTION_FILE")
                .unwrap_or_else(|| DEFAULT_FACTION_FILE.to_string())
                .into(),
            credentials_file: var("CREDENTIALS_FILE")
                .unwrap_or_else(|| DEFAULT_CREDENTIALS_FILE.to_string())
                .into(),
            torn_api_url: var("TORN_API_URL")
                .unwrap_or_else(|| DEFAULT_TORN_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            torn_request_timeout: Duration::from_secs(parse_or(
                &var,
                "TORN_REQUEST_TIMEOUT_SECS",
                10,
            )?),
            torn_min_interval: Duration::from_millis(parse_or(
                &var,
                "TORN_API_MIN_INTERVAL_MS",
                1000,
            )?),
            join_reply_timeout: Duration::from_secs(parse_or(&var, "JOIN_TIMEOUT_SECS", 120)?),
            check_schedule: var("CHECK_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_CHECK_SCHEDULE.to_string()),
        })
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}
