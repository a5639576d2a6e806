//! In-memory implementations of the platform and Torn seams.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::data::memory::MemoryStore;
use crate::data::GateStore;
use crate::error::platform::PlatformError;
use crate::error::verification::TornApiError;
use crate::error::AppError;
use crate::model::notice::Notice;
use crate::model::role::RoleScheme;
use crate::model::torn::{BasicProfile, FactionDto, Profile};
use crate::service::platform::{Announcer, GuildMember, JoinConversation, MemberDirectory};
use crate::service::reconcile::Reconciler;
use crate::service::torn::TornApi;
use crate::service::verification::Verifier;

mod verification;

/// Torn API answering from canned tables.
#[derive(Default)]
pub struct FakeTornApi {
    basic: HashMap<String, Result<BasicProfile, TornApiError>>,
    profiles: HashMap<u64, Result<Profile, TornApiError>>,
    pub basic_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
}

impl FakeTornApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key resolving to `player_id` with the given faction.
    pub fn with_player(
        mut self,
        api_key: &str,
        player_id: u64,
        name: &str,
        faction_name: &str,
        position: &str,
    ) -> Self {
        self.basic
            .insert(api_key.to_string(), Ok(BasicProfile { player_id }));
        self.profiles.insert(
            player_id,
            Ok(Profile {
                name: Some(name.to_string()),
                faction: Some(FactionDto {
                    faction_id: Some(9001),
                    faction_name: Some(faction_name.to_string()),
                    position: Some(position.to_string()),
                }),
            }),
        );
        self
    }

    pub fn with_basic(mut self, api_key: &str, result: Result<BasicProfile, TornApiError>) -> Self {
        self.basic.insert(api_key.to_string(), result);
        self
    }

    pub fn with_profile(mut self, player_id: u64, result: Result<Profile, TornApiError>) -> Self {
        self.profiles.insert(player_id, result);
        self
    }

    pub fn calls(&self) -> usize {
        self.basic_calls.load(Ordering::SeqCst) + self.profile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TornApi for FakeTornApi {
    async fn fetch_basic_profile(&self, api_key: &str) -> Result<BasicProfile, TornApiError> {
        self.basic_calls.fetch_add(1, Ordering::SeqCst);
        self.basic
            .get(api_key)
            .cloned()
            .unwrap_or(Err(TornApiError::InvalidCredential))
    }

    async fn fetch_full_profile(
        &self,
        player_id: u64,
        _api_key: &str,
    ) -> Result<Profile, TornApiError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(&player_id)
            .cloned()
            .unwrap_or_else(|| Err(TornApiError::Unavailable("unknown player".to_string())))
    }
}

#[derive(Default)]
pub struct MemberState {
    /// Roles existing in the guild.
    pub guild_roles: Vec<String>,
    /// Roles held by the member.
    pub roles: Vec<String>,
    pub nickname: Option<String>,
    pub direct_messages: Vec<Notice>,
    pub dm_closed: bool,
    pub roles_forbidden: bool,
}

/// Guild member recording every side effect. Clones share state.
#[derive(Clone)]
pub struct FakeMember {
    id: String,
    pub state: Arc<Mutex<MemberState>>,
}

impl FakeMember {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            state: Arc::new(Mutex::new(MemberState::default())),
        }
    }

    pub fn holding(self, roles: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for role in roles {
                state.guild_roles.push(role.to_string());
                state.roles.push(role.to_string());
            }
        }
        self
    }

    pub fn with_dm_closed(self) -> Self {
        self.state.lock().unwrap().dm_closed = true;
        self
    }

    pub fn with_roles_forbidden(self) -> Self {
        self.state.lock().unwrap().roles_forbidden = true;
        self
    }

    pub fn roles(&self) -> Vec<String> {
        self.state.lock().unwrap().roles.clone()
    }

    pub fn guild_roles(&self) -> Vec<String> {
        self.state.lock().unwrap().guild_roles.clone()
    }

    pub fn nickname(&self) -> Option<String> {
        self.state.lock().unwrap().nickname.clone()
    }

    pub fn direct_messages(&self) -> Vec<Notice> {
        self.state.lock().unwrap().direct_messages.clone()
    }
}

#[async_trait]
impl GuildMember for FakeMember {
    fn account_id(&self) -> String {
        self.id.clone()
    }

    async fn role_names(&self) -> Result<Vec<String>, PlatformError> {
        Ok(self.roles())
    }

    async fn grant_role(&self, role_name: &str) -> Result<bool, PlatformError> {
        let mut state = self.state.lock().unwrap();
        if state.roles_forbidden {
            return Err(PlatformError::PermissionDenied("Missing Permissions".to_string()));
        }
        if !state.guild_roles.iter().any(|r| r == role_name) {
            state.guild_roles.push(role_name.to_string());
        }
        if state.roles.iter().any(|r| r == role_name) {
            return Ok(false);
        }
        state.roles.push(role_name.to_string());
        Ok(true)
    }

    async fn revoke_role(&self, role_name: &str) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        if state.roles_forbidden {
            return Err(PlatformError::PermissionDenied("Missing Permissions".to_string()));
        }
        state.roles.retain(|r| r != role_name);
        Ok(())
    }

    async fn set_nickname(&self, nickname: &str) -> Result<(), PlatformError> {
        self.state.lock().unwrap().nickname = Some(nickname.to_string());
        Ok(())
    }

    async fn send_direct(&self, notice: &Notice) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        if state.dm_closed {
            return Err(PlatformError::PermissionDenied(
                "Cannot send messages to this user".to_string(),
            ));
        }
        state.direct_messages.push(notice.clone());
        Ok(())
    }
}

/// Channel collecting announcements.
#[derive(Default)]
pub struct FakeAnnouncer {
    pub posts: Mutex<Vec<Notice>>,
}

impl FakeAnnouncer {
    pub fn posts(&self) -> Vec<Notice> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Announcer for FakeAnnouncer {
    async fn announce(&self, notice: &Notice) -> Result<(), PlatformError> {
        self.posts.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

/// Guild roster keyed by account id.
#[derive(Default)]
pub struct FakeDirectory {
    members: HashMap<String, FakeMember>,
    broken: Vec<String>,
}

impl FakeDirectory {
    pub fn with_member(mut self, member: &FakeMember) -> Self {
        self.members.insert(member.account_id(), member.clone());
        self
    }

    /// Lookups of `account_id` fail as if Discord errored.
    pub fn with_broken_lookup(mut self, account_id: &str) -> Self {
        self.broken.push(account_id.to_string());
        self
    }
}

#[async_trait]
impl MemberDirectory for FakeDirectory {
    async fn find_member(
        &self,
        account_id: &str,
    ) -> Result<Option<Box<dyn GuildMember>>, PlatformError> {
        if self.broken.iter().any(|id| id == account_id) {
            return Err(PlatformError::PermissionDenied("Missing Access".to_string()));
        }

        Ok(self
            .members
            .get(account_id)
            .cloned()
            .map(|member| Box::new(member) as Box<dyn GuildMember>))
    }
}

/// When the requester answers the DM prompt.
pub enum ReplyPlan {
    After(Duration, String),
    /// Answered while the prompt is still being delivered.
    DuringPrompt(String),
    Never,
}

/// Requester side of a join conversation.
pub struct FakeConversation {
    pub responses: Vec<Notice>,
    pub direct: Vec<Notice>,
    pub dm_closed: bool,
    pub replies_read: usize,
    inbox: Vec<String>,
    plan: ReplyPlan,
}

impl FakeConversation {
    pub fn replying(reply: &str) -> Self {
        Self::with_plan(ReplyPlan::After(Duration::ZERO, reply.to_string()))
    }

    pub fn with_plan(plan: ReplyPlan) -> Self {
        Self {
            responses: Vec::new(),
            direct: Vec::new(),
            dm_closed: false,
            replies_read: 0,
            inbox: Vec::new(),
            plan,
        }
    }

    pub fn with_dm_closed(mut self) -> Self {
        self.dm_closed = true;
        self
    }
}

#[async_trait]
impl JoinConversation for FakeConversation {
    async fn respond(&mut self, notice: &Notice) -> Result<(), PlatformError> {
        self.responses.push(notice.clone());
        Ok(())
    }

    async fn open_direct(&mut self, prompt: &Notice) -> Result<(), PlatformError> {
        if self.dm_closed {
            return Err(PlatformError::PermissionDenied(
                "Cannot send messages to this user".to_string(),
            ));
        }
        if let ReplyPlan::DuringPrompt(reply) = &self.plan {
            self.inbox.push(reply.clone());
        }
        self.direct.push(prompt.clone());
        Ok(())
    }

    async fn send_direct(&mut self, notice: &Notice) -> Result<(), PlatformError> {
        self.direct.push(notice.clone());
        Ok(())
    }

    async fn next_reply(&mut self) -> Option<String> {
        if !self.inbox.is_empty() {
            self.replies_read += 1;
            return Some(self.inbox.remove(0));
        }

        match &self.plan {
            ReplyPlan::After(delay, reply) => {
                let reply = reply.clone();
                tokio::time::sleep(*delay).await;
                self.replies_read += 1;
                Some(reply)
            }
            ReplyPlan::DuringPrompt(_) | ReplyPlan::Never => std::future::pending().await,
        }
    }
}

/// Shared wiring for workflow tests.
pub struct Harness {
    pub store: MemoryStore,
    pub api: Arc<FakeTornApi>,
    pub verifier: Verifier,
    pub scheme: RoleScheme,
    pub announcer: FakeAnnouncer,
}

impl Harness {
    pub fn new(store: MemoryStore, api: FakeTornApi) -> Self {
        let api = Arc::new(api);
        Self {
            store,
            verifier: Verifier::new(api.clone()),
            api,
            scheme: RoleScheme::new("Faction", true),
            announcer: FakeAnnouncer::default(),
        }
    }

    pub fn reconciler(&self) -> Reconciler<'_> {
        Reconciler::new(&self.store, &self.scheme, Some(&self.announcer), true)
    }

    pub async fn stored_credentials(&self) -> Vec<String> {
        self.store
            .load_credentials()
            .await
            .unwrap()
            .into_keys()
            .collect()
    }
}
