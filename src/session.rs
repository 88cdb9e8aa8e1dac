use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "blog_session";

/// Ids a single browser session has already counted.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub viewed_posts: HashSet<i64>,
    pub liked_posts: HashSet<i64>,
    pub liked_comments: HashSet<i64>,
    pub expires_at: DateTime<Utc>,
}

impl SessionState {
    fn new(expires_at: DateTime<Utc>) -> Self {
        Self {
            viewed_posts: HashSet::new(),
            liked_posts: HashSet::new(),
            liked_comments: HashSet::new(),
            expires_at,
        }
    }

    fn seen_mut(&mut self, counter: Counter) -> &mut HashSet<i64> {
        match counter {
            Counter::Read => &mut self.viewed_posts,
            Counter::PostLike => &mut self.liked_posts,
            Counter::CommentLike => &mut self.liked_comments,
        }
    }
}

/// The per-session counters a reader can bump once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Read,
    PostLike,
    CommentLike,
}

/// In-memory map of session id to session state, shared by all requests.
///
/// A session only gets an entry once it counts something, so requests that
/// never read or like anything leave the map alone.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
    max_age: Duration,
}

impl SessionStore {
    pub fn new(max_age: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_age,
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Resumes the session named by the cookie. A missing, unknown or expired
    /// id gets a fresh one that is not stored until it first counts something.
    /// The flag is true when an existing session was resumed.
    pub async fn load(&self, session_id: Option<Uuid>) -> (Session, bool) {
        if let Some(id) = session_id {
            let sessions = self.sessions.read().await;
            if sessions
                .get(&id)
                .is_some_and(|state| state.expires_at > Utc::now())
            {
                return (self.handle(id), true);
            }
        }

        (self.handle(Uuid::now_v7()), false)
    }

    /// True once `session_id` holds state in the store.
    pub async fn is_stored(&self, session_id: Uuid) -> bool {
        self.sessions.read().await.contains_key(&session_id)
    }

    #[cfg(test)]
    pub async fn state(&self, session_id: Uuid) -> Option<SessionState> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn handle(&self, id: Uuid) -> Session {
        Session {
            id,
            store: self.clone(),
        }
    }

    // Check-and-insert under one write lock, so the answer is only true once.
    async fn mark(&self, session_id: Uuid, counter: Counter, item_id: i64) -> bool {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        if !sessions.contains_key(&session_id) {
            sessions.retain(|_, state| state.expires_at > now);
            tracing::debug!(%session_id, active = sessions.len() + 1, "Session started");
        }

        sessions
            .entry(session_id)
            .or_insert_with(|| SessionState::new(now + self.max_age))
            .seen_mut(counter)
            .insert(item_id)
    }

    async fn unmark(&self, session_id: Uuid, counter: Counter, item_id: i64) {
        let mut sessions = self.sessions.write().await;
        if let Some(state) = sessions.get_mut(&session_id) {
            state.seen_mut(counter).remove(&item_id);
        }
    }
}

/// Per-request handle to one session, placed in request extensions.
#[derive(Clone)]
pub struct Session {
    id: Uuid,
    store: SessionStore,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// True the first time this session reads `publish_id`.
    pub async fn first_view(&self, publish_id: i64) -> bool {
        self.store.mark(self.id, Counter::Read, publish_id).await
    }

    pub async fn first_post_like(&self, publish_id: i64) -> bool {
        self.store.mark(self.id, Counter::PostLike, publish_id).await
    }

    pub async fn first_comment_like(&self, comment_id: i64) -> bool {
        self.store.mark(self.id, Counter::CommentLike, comment_id).await
    }

    /// Drops a mark whose increment found nothing to count, so the id can
    /// still be counted once it exists.
    pub async fn forget(&self, counter: Counter, item_id: i64) {
        self.store.unmark(self.id, counter, item_id).await
    }
}
