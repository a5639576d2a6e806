/// Discord's limit on nickname length, in characters.
const MAX_NICKNAME_CHARS: usize = 32;

/// Deterministic naming of the roles the bot manages.
///
/// In per-position mode every faction position maps to its own role named
/// `"{prefix} {position}"`. Internal whitespace runs collapse to one space so
/// `"Vice  Leader"` and `"Vice Leader"` share a role, and an empty position
/// maps to `"Member"`. In fixed mode every member receives the role named
/// `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleScheme {
    prefix: String,
    per_position: bool,
}

impl RoleScheme {
    pub fn new(prefix: impl Into<String>, per_position: bool) -> Self {
        Self {
            prefix: prefix.into(),
            per_position,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Role granted to a member holding `position`.
    pub fn role_for(&self, position: &str) -> String {
        if !self.per_position {
            return self.prefix.clone();
        }

        let position = position.split_whitespace().collect::<Vec<_>>().join(" ");
        let position = if position.is_empty() {
            "Member".to_string()
        } else {
            position
        };

        format!("{} {}", self.prefix, position)
    }

    /// Whether `role_name` is one of the roles this scheme manages.
    pub fn owns(&self, role_name: &str) -> bool {
        role_name == self.prefix
            || role_name
                .strip_prefix(&self.prefix)
                .is_some_and(|rest| rest.starts_with(' '))
    }

    /// Nickname embedding the verified Torn identity, e.g. `"Bob [123]"`.
    ///
    /// The name is shortened so the id suffix always fits Discord's limit.
    pub fn nickname_for(player_name: &str, player_id: u64) -> String {
        let suffix = format!(" [{}]", player_id);
        let budget = MAX_NICKNAME_CHARS.saturating_sub(suffix.chars().count());
        let name: String = player_name.trim().chars().take(budget).collect();

        format!("{}{}", name, suffix)
    }
}
