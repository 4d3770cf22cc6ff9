use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUIZ TYPES ────────────────────────────────────────────────────────────────
//

/// Identity of one of the four fixed answer options.
///
/// The backend addresses options by field name, so the serialized form is
/// `option_a`..`option_d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKey {
    #[serde(rename = "option_a")]
    A,
    #[serde(rename = "option_b")]
    B,
    #[serde(rename = "option_c")]
    C,
    #[serde(rename = "option_d")]
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::A => "option_a",
            OptionKey::B => "option_b",
            OptionKey::C => "option_c",
            OptionKey::D => "option_d",
        }
    }
}

/// A single multiple-choice question plus its local answering state.
///
/// `answered`/`selected_option` default on deserialization so raw backend
/// payloads (which carry only the question fields) decode directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: OptionKey,
    #[serde(default)]
    pub answered: bool,
    #[serde(default, rename = "selectedOption")]
    pub selected_option: Option<OptionKey>,
}

impl QuizItem {
    #[must_use]
    pub fn option_text(&self, key: OptionKey) -> &str {
        match key {
            OptionKey::A => &self.option_a,
            OptionKey::B => &self.option_b,
            OptionKey::C => &self.option_c,
            OptionKey::D => &self.option_d,
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.answered && self.selected_option == Some(self.correct_answer)
    }

    /// Clear answering state, e.g. when loading a fresh question set.
    pub fn reset(&mut self) {
        self.answered = false;
        self.selected_option = None;
    }
}

/// Result of answering a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub is_complete: bool,
    pub score: u32,
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// An in-progress quiz over an ordered question set.
///
/// The score is maintained incrementally as answers arrive and is therefore
/// always equal to the number of items whose selected option matches the
/// correct one. A question accepts exactly one answer; later attempts are
/// rejected so the score can never double-count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Quiz {
    items: Vec<QuizItem>,
    score: u32,
}

impl Quiz {
    /// Build a quiz from stored items, recovering the score from their state.
    #[must_use]
    pub fn from_items(items: Vec<QuizItem>) -> Self {
        let score = items.iter().filter(|item| item.is_correct()).count() as u32;
        Self { items, score }
    }

    /// Build a quiz from a freshly fetched question set, clearing any
    /// answering state the payload may have carried.
    #[must_use]
    pub fn fresh(mut items: Vec<QuizItem>) -> Self {
        for item in &mut items {
            item.reset();
        }
        Self { items, score: 0 }
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.answered)
    }

    /// Record the first answer for the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfBounds` for an unknown index and
    /// `QuizError::AlreadyAnswered` when the question was answered before.
    pub fn answer(&mut self, index: usize, selected: OptionKey) -> Result<AnswerOutcome, QuizError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(QuizError::OutOfBounds { index, len })?;

        if item.answered {
            return Err(QuizError::AlreadyAnswered { index });
        }

        item.answered = true;
        item.selected_option = Some(selected);
        let correct = selected == item.correct_answer;
        if correct {
            self.score += 1;
        }

        Ok(AnswerOutcome {
            correct,
            is_complete: self.is_complete(),
            score: self.score,
        })
    }

    /// Replace the question set, zeroing score and completion.
    pub fn reset_with(&mut self, items: Vec<QuizItem>) {
        *self = Quiz::fresh(items);
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question index {index} out of bounds (quiz has {len} questions)")]
    OutOfBounds { index: usize, len: usize },

    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
