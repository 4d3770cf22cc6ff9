mod chatbot;
mod flashcards;
mod further_knowledge;
mod home;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chatbot::ChatbotView;
pub use flashcards::FlashcardsView;
pub use further_knowledge::FurtherKnowledgeView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
