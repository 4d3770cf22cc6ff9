use std::sync::Arc;

use lecture_core::model::Transcript;
use storage::repository::SessionRepository;

use crate::backend::LectureBackend;
use crate::error::ChatError;

/// Drives the question-answering conversation over the loaded lecture.
#[derive(Clone)]
pub struct ChatService {
    backend: Arc<dyn LectureBackend>,
    sessions: Arc<dyn SessionRepository>,
}

impl ChatService {
    #[must_use]
    pub fn new(backend: Arc<dyn LectureBackend>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { backend, sessions }
    }

    /// Append the user's message, send the full transcript to the completion
    /// endpoint, and append the reply.
    ///
    /// The user message is persisted before the completion call, so a failed
    /// call leaves it in place; the caller surfaces the error inline and the
    /// user can retry without retyping.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Transcript` for blank input, `ChatError::Storage`
    /// for persistence failures and `ChatError::Completion` when the backend
    /// call fails after the user message was recorded.
    pub async fn send_message(
        &self,
        transcript: &mut Transcript,
        text: &str,
    ) -> Result<(), ChatError> {
        transcript.push_user(text)?;
        self.sessions.save_transcript(transcript).await?;

        let reply = self
            .backend
            .chat_completion(transcript.messages())
            .await
            .map_err(ChatError::Completion)?;

        transcript.push_assistant(reply);
        self.sessions.save_transcript(transcript).await?;
        Ok(())
    }
}
