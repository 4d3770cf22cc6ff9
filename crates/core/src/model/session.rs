use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Flashcard, QuizItem, Reference, Transcript};

/// The lecture currently loaded into the app.
///
/// Created by a successful extraction call, overwritten wholesale by the next
/// upload, and persisted across restarts until then.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LectureSession {
    pub summary_text: String,
    pub raw_document_text: String,
    pub media_url: Option<String>,
}

impl LectureSession {
    #[must_use]
    pub fn new(summary_text: impl Into<String>, raw_document_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
            raw_document_text: raw_document_text.into(),
            media_url: None,
        }
    }

    /// Whether any lecture has been loaded at all.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.summary_text.is_empty() || !self.raw_document_text.is_empty()
    }
}

/// The single typed session-state object the store loads and saves.
///
/// Each view owns exactly one slot of this snapshot and writes it back through
/// the repository; the upload flow replaces the snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: LectureSession,
    pub quiz: Vec<QuizItem>,
    pub flashcards: Vec<Flashcard>,
    pub references: Vec<Reference>,
    pub transcript: Transcript,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn new(
        session: LectureSession,
        quiz: Vec<QuizItem>,
        flashcards: Vec<Flashcard>,
        references: Vec<Reference>,
        transcript: Transcript,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session,
            quiz,
            flashcards,
            references,
            transcript,
            updated_at: Some(updated_at),
        }
    }
}
