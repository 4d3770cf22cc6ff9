use std::sync::Arc;

use lecture_core::Clock;
use lecture_core::model::{LectureSession, Quiz, SessionSnapshot, Transcript};
use storage::repository::SessionRepository;

use crate::backend::LectureBackend;
use crate::error::UploadError;

/// What the Home view gets back from a document upload.
///
/// Media generation is a follow-up call that may fail without invalidating the
/// already-stored artifacts; in that case `media_warning` carries the message
/// to surface and `snapshot.session.media_url` stays `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub snapshot: SessionSnapshot,
    pub media_warning: Option<String>,
}

/// Runs the upload/extraction flow: one extraction call fanning out into the
/// artifact slots, then a media-generation follow-up.
#[derive(Clone)]
pub struct UploadService {
    clock: Clock,
    backend: Arc<dyn LectureBackend>,
    sessions: Arc<dyn SessionRepository>,
}

impl UploadService {
    #[must_use]
    pub fn new(
        clock: Clock,
        backend: Arc<dyn LectureBackend>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            clock,
            backend,
            sessions,
        }
    }

    /// Upload a lecture document and replace the whole session with its
    /// artifacts. The quiz starts unanswered and the chat transcript is
    /// re-seeded from the new document text, discarding any prior
    /// conversation.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Extraction` if the extraction call fails (nothing
    /// is stored in that case) and `UploadError::Storage` if persisting the
    /// new snapshot fails. Media-generation failure is not an error; see
    /// `UploadOutcome::media_warning`.
    pub async fn submit_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadOutcome, UploadError> {
        let document = self
            .backend
            .extract_text(file_name, bytes)
            .await
            .map_err(UploadError::Extraction)?;

        let quiz = Quiz::fresh(document.quiz);
        let transcript = Transcript::seeded(&document.raw_text);
        let mut snapshot = SessionSnapshot::new(
            LectureSession::new(document.summary_text, document.raw_text),
            quiz.items().to_vec(),
            document.flashcards,
            document.references,
            transcript,
            self.clock.now(),
        );
        self.sessions.replace_snapshot(&snapshot).await?;

        let media_warning = match self
            .backend
            .generate_media(&snapshot.session.summary_text)
            .await
        {
            Ok(url) => {
                self.sessions.save_media_url(&url).await?;
                snapshot.session.media_url = Some(url);
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "media generation failed, keeping artifacts");
                Some(
                    "Video generation failed. Quiz, flashcards and references are still loaded."
                        .to_string(),
                )
            }
        };

        Ok(UploadOutcome {
            snapshot,
            media_warning,
        })
    }
}
