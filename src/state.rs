//! State shared by every event handler and the scheduler.
//!
//! Cloned into each task; every field is reference counted, so clones share
//! the store, the verifier's rate gate and the scheduler flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::data::GateStore;
use crate::service::verification::Verifier;

#[derive(Clone)]
pub struct BotState {
    pub config: Arc<Config>,

    /// Faction and credential storage.
    pub store: Arc<dyn GateStore>,

    /// Verification workflow over the rate-gated Torn client.
    pub verifier: Verifier,

    scheduler_started: Arc<AtomicBool>,
}

impl BotState {
    pub fn new(config: Config, store: Arc<dyn GateStore>, verifier: Verifier) -> Self {
        Self {
            config: Arc::new(config),
            store,
            verifier,
            scheduler_started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` exactly once, for the caller that should start the
    /// revocation scheduler.
    pub fn claim_scheduler_start(&self) -> bool {
        !self.scheduler_started.swap(true, Ordering::SeqCst)
    }
}
