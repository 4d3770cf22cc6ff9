use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Greeting installed as the first visible message of every conversation.
pub const ASSISTANT_GREETING: &str = "Please ask me any questions regarding your lecture!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered, append-only conversation history.
///
/// The system message embeds the extracted lecture text and is sent to the
/// completion endpoint but never rendered. Seeding replaces the whole
/// transcript; within a seeded conversation messages are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Start a conversation over the given lecture text: a system context
    /// message followed by the fixed assistant greeting.
    #[must_use]
    pub fn seeded(document_text: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage::system(format!(
                    "You are a helpful tutor. Answer questions using this lecture content:\n\n{document_text}"
                )),
                ChatMessage::assistant(ASSISTANT_GREETING),
            ],
        }
    }

    /// Rehydrate from persisted messages.
    #[must_use]
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Every message including the system seed, oldest first. This is the
    /// payload shape the completion endpoint expects.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages to render: everything except system entries.
    pub fn visible(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages
            .iter()
            .filter(|message| message.role != Role::System)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message.
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError::BlankMessage` if the trimmed text is empty.
    pub fn push_user(&mut self, text: &str) -> Result<(), TranscriptError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TranscriptError::BlankMessage);
        }
        self.messages.push(ChatMessage::user(trimmed));
        Ok(())
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranscriptError {
    #[error("message is empty")]
    BlankMessage,
}
