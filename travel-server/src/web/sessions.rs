//! Per-user session storage.
//!
//! Each session sits behind its own async mutex. The lock is held only
//! while the state machine is touched, never across a route lookup, so a
//! `clear` or a newer `calculate` can land while an older lookup is still
//! in flight; the session's generation check then discards the old result.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;

use crate::registry::TravelerRegistry;
use crate::routing::RouteProvider;
use crate::session::{CalculationOutcome, RouteSession};

/// Maximum number of live sessions.
const MAX_SESSIONS: u64 = 10_000;

/// A session shared between request handlers.
pub type SharedSession = Arc<Mutex<RouteSession>>;

/// Opaque random session identifier, rendered as 32 hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Parse the 32-digit hex form.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u128::from_str_radix(s, 16).ok().map(Self)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({self})")
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Store of live sessions, expiring after a period of inactivity.
#[derive(Clone)]
pub struct SessionStore {
    sessions: MokaCache<SessionId, SharedSession>,
    registry: Arc<TravelerRegistry>,
}

impl SessionStore {
    /// Create a store whose sessions expire after `idle` without access.
    pub fn new(registry: Arc<TravelerRegistry>, idle: Duration) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(idle)
            .max_capacity(MAX_SESSIONS)
            .build();

        Self { sessions, registry }
    }

    /// Create and store a new idle session.
    pub async fn create(&self) -> (SessionId, SharedSession) {
        let id = SessionId::random();
        let session = Arc::new(Mutex::new(RouteSession::new(Arc::clone(&self.registry))));
        self.sessions.insert(id, Arc::clone(&session)).await;
        (id, session)
    }

    pub async fn get(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.get(id).await
    }

    pub async fn remove(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.remove(id).await
    }
}

/// Run a route calculation on a shared session.
///
/// The session lock is released while `provider` works, so the session
/// stays responsive and later requests can supersede this one.
pub async fn calculate_shared<P>(session: &SharedSession, provider: &P) -> CalculationOutcome
where
    P: RouteProvider + ?Sized,
{
    let ticket = session.lock().await.begin_calculation();
    let Some(ticket) = ticket else {
        return CalculationOutcome::NotReady;
    };

    let result = provider.first_leg(ticket.request()).await;

    session.lock().await.complete_calculation(ticket, result)
}
