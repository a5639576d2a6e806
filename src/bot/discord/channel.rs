use serenity::all::{ChannelId, ChannelType, GuildId, Http};

use crate::error::platform::PlatformError;

/// Finds the guild text channel named `name`.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Guild to search
/// - `name` - Exact channel name, e.g. `join`
///
/// # Returns
/// - `Ok(Some(ChannelId))` - First text channel with that name
/// - `Ok(None)` - The guild has no such channel
/// - `Err(PlatformError)` - Channel list could not be fetched
pub async fn find_text_channel(
    http: &Http,
    guild_id: GuildId,
    name: &str,
) -> Result<Option<ChannelId>, PlatformError> {
    let channels = guild_id.channels(http).await?;

    Ok(channels
        .into_values()
        .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
        .map(|channel| channel.id))
}
