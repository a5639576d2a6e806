//! Serenity implementations of the workflow's platform traits.

pub mod announcer;
pub mod channel;
pub mod conversation;
pub mod directory;
pub mod embed;
pub mod member;
pub mod permission;

pub use announcer::DiscordAnnouncer;
pub use conversation::DiscordJoinConversation;
pub use directory::DiscordMemberDirectory;
pub use member::DiscordMember;
