use std::sync::Arc;

use lecture_core::Clock;
use storage::repository::{SessionRepository, Storage};

use crate::backend::LectureBackend;
use crate::chat::ChatService;
use crate::error::AppServicesError;
use crate::quiz::QuizService;
use crate::upload::UploadService;

/// Assembles the app-facing services over a session store and a backend.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<dyn SessionRepository>,
    upload: Arc<UploadService>,
    chat: Arc<ChatService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services over an already-constructed storage, e.g. in-memory for
    /// tests.
    #[must_use]
    pub fn new(storage: &Storage, backend: Arc<dyn LectureBackend>, clock: Clock) -> Self {
        let sessions = Arc::clone(&storage.sessions);
        let upload = Arc::new(UploadService::new(
            clock,
            Arc::clone(&backend),
            Arc::clone(&sessions),
        ));
        let chat = Arc::new(ChatService::new(
            Arc::clone(&backend),
            Arc::clone(&sessions),
        ));
        let quiz = Arc::new(QuizService::new(backend, Arc::clone(&sessions)));

        Self {
            sessions,
            upload,
            chat,
            quiz,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        backend: Arc<dyn LectureBackend>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, backend, clock))
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<dyn SessionRepository> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn upload_service(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload)
    }

    #[must_use]
    pub fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
