use serde::{Deserialize, Serialize};

/// A question/answer pair. Immutable once loaded; ordering is display order
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}
