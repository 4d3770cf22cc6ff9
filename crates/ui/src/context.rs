use std::sync::Arc;

use services::{ChatService, QuizService, SessionRepository, UploadService};

/// What the composition root (e.g. `crates/app`) must provide to the views.
pub trait UiApp: Send + Sync {
    fn sessions(&self) -> Arc<dyn SessionRepository>;
    fn upload_service(&self) -> Arc<UploadService>;
    fn chat_service(&self) -> Arc<ChatService>;
    fn quiz_service(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    sessions: Arc<dyn SessionRepository>,
    upload_service: Arc<UploadService>,
    chat_service: Arc<ChatService>,
    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sessions: app.sessions(),
            upload_service: app.upload_service(),
            chat_service: app.chat_service(),
            quiz_service: app.quiz_service(),
        }
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<dyn SessionRepository> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn upload_service(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload_service)
    }

    #[must_use]
    pub fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat_service)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
