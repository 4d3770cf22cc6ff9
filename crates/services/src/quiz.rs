use std::sync::Arc;

use lecture_core::model::{AnswerOutcome, OptionKey, Quiz};
use storage::repository::SessionRepository;

use crate::backend::LectureBackend;
use crate::error::QuizServiceError;

/// Persisted answering and regeneration on top of the domain `Quiz`.
#[derive(Clone)]
pub struct QuizService {
    backend: Arc<dyn LectureBackend>,
    sessions: Arc<dyn SessionRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(backend: Arc<dyn LectureBackend>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { backend, sessions }
    }

    /// Record an answer and write the updated items back to the store.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` for re-answers and bad indices (state
    /// is untouched in that case) and `QuizServiceError::Storage` if the
    /// write-back fails.
    pub async fn answer(
        &self,
        quiz: &mut Quiz,
        index: usize,
        selected: OptionKey,
    ) -> Result<AnswerOutcome, QuizServiceError> {
        let outcome = quiz.answer(index, selected)?;
        self.sessions.save_quiz(quiz.items()).await?;
        Ok(outcome)
    }

    /// Fetch a fresh question set, reset score and completion, and persist it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Regeneration` if the fetch fails (the
    /// current quiz is kept) and `QuizServiceError::Storage` if persisting the
    /// new set fails.
    pub async fn regenerate(&self, quiz: &mut Quiz) -> Result<(), QuizServiceError> {
        let items = self
            .backend
            .regenerate_quiz()
            .await
            .map_err(QuizServiceError::Regeneration)?;
        quiz.reset_with(items);
        self.sessions.save_quiz(quiz.items()).await?;
        Ok(())
    }
}
