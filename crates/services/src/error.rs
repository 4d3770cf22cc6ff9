//! Shared error types for the services crate.

use thiserror::Error;

use lecture_core::model::{QuizError, TranscriptError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `LectureBackend` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `UploadService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("text extraction failed: {0}")]
    Extraction(#[source] BackendError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ChatService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error("could not get a reply: {0}")]
    Completion(#[source] BackendError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("could not fetch a new quiz: {0}")]
    Regeneration(#[source] BackendError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
