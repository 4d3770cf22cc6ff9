#![forbid(unsafe_code)]

pub mod app_services;
pub mod backend;
pub mod chat;
pub mod error;
pub mod quiz;
pub mod upload;

pub use lecture_core::Clock;
pub use storage::repository::{InMemorySessionStore, SessionRepository, Storage};

pub use app_services::AppServices;
pub use backend::{BackendConfig, ExtractedDocument, HttpBackend, LectureBackend};
pub use chat::ChatService;
pub use error::{AppServicesError, BackendError, ChatError, QuizServiceError, UploadError};
pub use quiz::QuizService;
pub use upload::{UploadOutcome, UploadService};
