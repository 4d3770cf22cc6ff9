use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use lecture_core::model::{QuizItem, SessionSnapshot, Transcript};

/// Errors surfaced by session store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable store for the lecture session and its derived artifacts.
///
/// The upload flow replaces the snapshot wholesale; the quiz and chat views
/// each write back only the slot they own. Loads tolerate corrupt slots by
/// substituting that slot's empty default, so a damaged store never blocks
/// startup.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Load the persisted snapshot, or `None` if nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for store access failures; corrupt slot
    /// contents degrade to defaults instead.
    async fn load_snapshot(&self) -> Result<Option<SessionSnapshot>, StorageError>;

    /// Overwrite the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be stored.
    async fn replace_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError>;

    /// Write back quiz answering state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the items cannot be stored.
    async fn save_quiz(&self, items: &[QuizItem]) -> Result<(), StorageError>;

    /// Write back the chat transcript.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the transcript cannot be stored.
    async fn save_transcript(&self, transcript: &Transcript) -> Result<(), StorageError>;

    /// Write back the generated media URL once it arrives.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the URL cannot be stored.
    async fn save_media_url(&self, url: &str) -> Result<(), StorageError>;
}

/// Simple in-memory session store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_snapshot<R>(
        &self,
        f: impl FnOnce(&mut SessionSnapshot) -> R,
    ) -> Result<R, StorageError> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let snapshot = guard.get_or_insert_with(SessionSnapshot::default);
        Ok(f(snapshot))
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn load_snapshot(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn replace_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }

    async fn save_quiz(&self, items: &[QuizItem]) -> Result<(), StorageError> {
        self.with_snapshot(|snapshot| snapshot.quiz = items.to_vec())
    }

    async fn save_transcript(&self, transcript: &Transcript) -> Result<(), StorageError> {
        self.with_snapshot(|snapshot| snapshot.transcript = transcript.clone())
    }

    async fn save_media_url(&self, url: &str) -> Result<(), StorageError> {
        self.with_snapshot(|snapshot| snapshot.session.media_url = Some(url.to_string()))
    }
}

/// Aggregates the session store behind a trait object for backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lecture_core::model::{LectureSession, OptionKey};
    use lecture_core::time::fixed_now;

    fn sample_snapshot() -> SessionSnapshot {
        SessionSnapshot::new(
            LectureSession::new("summary", "raw"),
            vec![QuizItem {
                question: "Q".into(),
                option_a: "A".into(),
                option_b: "B".into(),
                option_c: "C".into(),
                option_d: "D".into(),
                correct_answer: OptionKey::A,
                answered: false,
                selected_option: None,
            }],
            Vec::new(),
            Vec::new(),
            Transcript::seeded("raw"),
            fixed_now(),
        )
    }

    #[tokio::test]
    async fn load_on_empty_store_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.load_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_then_load_round_trips() {
        let store = InMemorySessionStore::new();
        let snapshot = sample_snapshot();

        store.replace_snapshot(&snapshot).await.unwrap();
        let loaded = store.load_snapshot().await.unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn granular_saves_update_only_their_slot() {
        let store = InMemorySessionStore::new();
        let snapshot = sample_snapshot();
        store.replace_snapshot(&snapshot).await.unwrap();

        let mut transcript = snapshot.transcript.clone();
        transcript.push_user("hello").unwrap();
        store.save_transcript(&transcript).await.unwrap();
        store.save_media_url("https://cdn.example/v.mp4").await.unwrap();

        let loaded = store.load_snapshot().await.unwrap().unwrap();
        assert_eq!(loaded.transcript, transcript);
        assert_eq!(
            loaded.session.media_url.as_deref(),
            Some("https://cdn.example/v.mp4")
        );
        assert_eq!(loaded.quiz, snapshot.quiz);
    }
}
