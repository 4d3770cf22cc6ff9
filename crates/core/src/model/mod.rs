mod chat;
mod flashcard;
mod quiz;
mod reference;
mod session;

pub use chat::{ASSISTANT_GREETING, ChatMessage, Role, Transcript, TranscriptError};
pub use flashcard::Flashcard;
pub use quiz::{AnswerOutcome, OptionKey, Quiz, QuizError, QuizItem};
pub use reference::Reference;
pub use session::{LectureSession, SessionSnapshot};
