//! Owned, in-memory session store.
//!
//! Constructed once at startup and shared through application state.
//! No expiry and no size bound: sessions live as long as the process.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Question, ResponseRecord, Session};

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `session` under `id`. An existing entry is replaced.
    pub async fn create(&self, id: impl Into<String>, session: Session) {
        let id = id.into();
        let replaced = self.sessions.write().await.insert(id.clone(), session).is_some();
        debug!(session_id = %id, replaced, "session stored");
    }

    /// Snapshot of the session, if any.
    pub async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Appends to `questions_asked`; `false` if the id is unknown.
    pub async fn append_question(&self, id: &str, question: Question) -> bool {
        match self.sessions.write().await.get_mut(id) {
            Some(session) => {
                session.questions_asked.push(question);
                true
            }
            None => false,
        }
    }

    /// Appends to `responses`; `false` if the id is unknown.
    pub async fn append_response(&self, id: &str, record: ResponseRecord) -> bool {
        match self.sessions.write().await.get_mut(id) {
            Some(session) => {
                session.responses.push(record);
                true
            }
            None => false,
        }
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    fn session(id: &str) -> Session {
        Session {
            id: id.to_string(),
            candidate: "Ada".into(),
            level: "mid".into(),
            focus_areas: vec!["spring_boot".into()],
            questions_asked: vec![Question::new(
                "Q1",
                QuestionType::Technical,
                "mid",
                "spring_boot",
            )],
            responses: Vec::new(),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let store = SessionStore::new();
        assert_eq!(store.len().await, 0);
        store.create("a", session("a")).await;
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("a").await.unwrap().candidate, "Ada");
        assert!(store.get("b").await.is_none());
    }

    #[tokio::test]
    async fn appends_only_to_known_sessions() {
        let store = SessionStore::new();
        store.create("a", session("a")).await;

        let q2 = Question::new("Q2", QuestionType::Technical, "adaptive", "follow_up");
        assert!(store.append_question("a", q2.clone()).await);
        assert!(!store.append_question("missing", q2.clone()).await);

        let rec = ResponseRecord {
            question: "Q2".into(),
            candidate_answer: "A2".into(),
            score: 8,
            feedback: "fine".into(),
        };
        assert!(store.append_response("a", rec.clone()).await);
        assert!(!store.append_response("missing", rec.clone()).await);

        let s = store.get("a").await.unwrap();
        assert_eq!(s.questions_asked.len(), 2);
        assert_eq!(s.questions_asked[1], q2);
        assert_eq!(s.responses, vec![rec]);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn same_id_is_last_write_wins() {
        let store = SessionStore::new();
        store.create("a", session("a")).await;
        let mut other = session("a");
        other.candidate = "Bo".into();
        store.create("a", other).await;
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("a").await.unwrap().candidate, "Bo");
    }
}
