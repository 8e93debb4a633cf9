//! In-memory session store.
//!
//! One entry per session id behind a tokio `RwLock`. Handlers clone the
//! session out, transform it through `flow::apply`, and write it back; the
//! lock guards only the map. There is one logical writer per session, so no
//! per-entry locking is needed.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::Session;

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session and returns a copy of its initial state.
    pub async fn create(&self) -> Session {
        let session = Session::new();
        self.inner
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Upserts a session under its own id.
    pub async fn put(&self, session: Session) {
        self.inner.write().await.insert(session.id, session);
    }

    /// Start Fresh: replaces the stored session with fresh defaults under the
    /// same id, including a new chat handle. `None` for unknown ids.
    pub async fn reset(&self, id: Uuid) -> Option<Session> {
        let mut sessions = self.inner.write().await;
        if !sessions.contains_key(&id) {
            return None;
        }
        let fresh = Session::with_id(id);
        sessions.insert(id, fresh.clone());
        Some(fresh)
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{apply, Action, Page};

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let store = SessionStore::new();
        let session = store.create().await;
        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.id, session.id);
        assert_eq!(fetched.current_page, Page::ProfileSetup);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_put_persists_transformed_state() {
        let store = SessionStore::new();
        let session = store.create().await;
        let id = session.id;

        let session = apply(session, Action::SubmitProfileAnswer("Jane Doe".into()));
        store.put(session).await;

        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched.stage, 1);
        assert_eq!(
            fetched.user_data.get("FullName").map(String::as_str),
            Some("Jane Doe")
        );
    }

    #[tokio::test]
    async fn test_reset_equals_a_fresh_session() {
        let store = SessionStore::new();
        let session = store.create().await;
        let id = session.id;
        let old_chat = session.chat.id;

        let mut session = apply(session, Action::SubmitProfileAnswer("Jane Doe".into()));
        session.selected_career_path = Some("Data Science".into());
        session.current_page = Page::LearningRoadmap;
        store.put(session).await;

        let fresh = store.reset(id).await.unwrap();
        assert_eq!(fresh.id, id);
        assert_eq!(fresh.current_page, Page::ProfileSetup);
        assert_eq!(fresh.stage, 0);
        assert!(fresh.user_data.is_empty());
        assert!(fresh.career_preferences.is_empty());
        assert!(fresh.career_path_recommendations.is_empty());
        assert!(fresh.selected_career_path.is_none());
        assert!(fresh.consultation_history.is_empty());
        assert!(fresh.skills_gap.is_empty());
        assert_eq!(fresh.break_duration, 0.0);
        assert_ne!(fresh.chat.id, old_chat);

        // The reset state is what later reads see
        let fetched = store.get(id).await.unwrap();
        assert!(fetched.user_data.is_empty());
    }

    #[tokio::test]
    async fn test_reset_unknown_id_is_none() {
        let store = SessionStore::new();
        assert!(store.reset(Uuid::new_v4()).await.is_none());
    }
}
