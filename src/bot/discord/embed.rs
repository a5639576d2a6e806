use serenity::all::{CreateEmbed, CreateMessage};

use crate::model::notice::Notice;

/// Renders a notice as a Discord embed.
pub fn notice_embed(notice: &Notice) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .description(&notice.description)
        .colour(notice.tone.colour());

    match &notice.title {
        Some(title) => embed.title(title),
        None => embed,
    }
}

/// Wraps a notice in a channel message.
pub fn notice_message(notice: &Notice) -> CreateMessage {
    CreateMessage::new().embed(notice_embed(notice))
}
