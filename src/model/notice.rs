//! Platform-neutral rich messages.
//!
//! The workflow describes what to tell a user as a `Notice`; the Discord
//! adapter renders it as an embed whose colour follows the `Tone`. All
//! user-facing wording lives here.

/// Colour family of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Failure,
}

impl Tone {
    /// Embed colour as RGB, matching Discord's named palette.
    pub fn colour(self) -> u32 {
        match self {
            Tone::Info => 0x3498DB,
            Tone::Success => 0x2ECC71,
            Tone::Warning => 0xE67E22,
            Tone::Failure => 0xE74C3C,
        }
    }
}

/// A message with optional title, body and tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: Option<String>,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    pub fn new(tone: Tone, description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            tone,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn faction_setup_required(join_channel: &str) -> Self {
        Self::new(
            Tone::Warning,
            format!(
                "Hi! I don't know your Torn City faction name yet.\n\
                 Please **type the exact faction name** you want me to verify against in this channel (`{}`).\n\n\
                 Only server admins can set this.",
                join_channel
            ),
        )
        .titled("Faction Setup Required")
    }

    pub fn faction_set(faction: &str) -> Self {
        Self::new(
            Tone::Success,
            format!(
                "✅ Faction name set to **{}**. Players will now be verified against this.",
                faction
            ),
        )
    }

    pub fn admin_only_setup() -> Self {
        Self::new(Tone::Failure, "❌ Only admins can set the faction name.")
    }

    pub fn admin_only_command() -> Self {
        Self::new(Tone::Failure, "❌ You must be an admin to use this command.")
    }

    pub fn faction_not_set() -> Self {
        Self::new(
            Tone::Failure,
            "❌ The faction name is not set yet. Please wait for an admin to set it.",
        )
    }

    pub fn guild_only() -> Self {
        Self::new(Tone::Failure, "❌ This command can only be used inside the server.")
    }

    pub fn check_direct_messages() -> Self {
        Self::new(Tone::Info, "✅ I've sent you a DM! Please check your messages.")
    }

    pub fn direct_messages_closed() -> Self {
        Self::new(
            Tone::Warning,
            "⚠️ I couldn't DM you. Please enable DMs and try again.",
        )
    }

    pub fn api_key_prompt() -> Self {
        Self::new(
            Tone::Info,
            "Please reply with your Torn City API key to verify your faction membership.",
        )
        .titled("Torn API Key Required")
    }

    pub fn reply_timed_out() -> Self {
        Self::new(
            Tone::Failure,
            "❌ Timeout: You took too long to reply. Please try /join again.",
        )
    }

    pub fn invalid_api_key() -> Self {
        Self::new(
            Tone::Failure,
            "❌ Invalid API key or error. Please try again.",
        )
    }

    pub fn no_faction_data() -> Self {
        Self::new(
            Tone::Failure,
            "❌ Could not fetch faction data. Check your API key.",
        )
    }

    pub fn not_in_faction(faction: &str) -> Self {
        Self::new(
            Tone::Failure,
            format!(
                "❌ You are not in the required faction (**{}**). Access denied.",
                faction
            ),
        )
    }

    pub fn welcome_member(player_name: &str) -> Self {
        Self::new(
            Tone::Success,
            format!(
                "✅ Welcome, **{}**! You now have access to the faction channels.",
                player_name
            ),
        )
    }

    pub fn welcome_announcement(player_name: &str, role_name: &str) -> Self {
        Self::new(
            Tone::Success,
            format!("🎉 Welcome **{}** [{}]!", player_name, role_name),
        )
    }

    pub fn access_revoked(reason: &str) -> Self {
        Self::new(
            Tone::Failure,
            format!(
                "{}\nYour faction roles have been removed. Use /join to verify again.",
                reason
            ),
        )
        .titled("Faction Access Removed")
    }

    pub fn unexpected_failure() -> Self {
        Self::new(
            Tone::Failure,
            "❌ An error occurred. Please try again later.",
        )
    }
}
