use serenity::all::{GuildId, Permissions, Role, RoleId, UserId};
use std::collections::HashMap;

/// Whether a guild member holds administrator rights.
///
/// The owner always does; otherwise any of the member's roles, or the
/// `@everyone` role (whose id equals the guild id), must grant
/// `ADMINISTRATOR`.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `owner_id` - Owner of that guild
/// - `user_id` - Member being checked
/// - `member_roles` - Role ids the member holds
/// - `guild_roles` - Every role of the guild
pub fn is_administrator(
    guild_id: GuildId,
    owner_id: UserId,
    user_id: UserId,
    member_roles: &[RoleId],
    guild_roles: &HashMap<RoleId, Role>,
) -> bool {
    if user_id == owner_id {
        return true;
    }

    let everyone = RoleId::new(guild_id.get());

    member_roles
        .iter()
        .chain(std::iter::once(&everyone))
        .filter_map(|id| guild_roles.get(id))
        .any(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
}
