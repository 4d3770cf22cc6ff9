use std::env;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use lecture_core::model::{ChatMessage, Flashcard, QuizItem, Reference};

use crate::error::BackendError;

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("LECTUREMATE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Everything extracted from an uploaded lecture document in one call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedDocument {
    pub summary_text: String,
    pub raw_text: String,
    pub quiz: Vec<QuizItem>,
    pub flashcards: Vec<Flashcard>,
    pub references: Vec<Reference>,
}

/// The remote service that does all the heavy lifting: document parsing,
/// quiz/flashcard generation, media synthesis and chat completion.
#[async_trait]
pub trait LectureBackend: Send + Sync {
    /// Upload a document and receive the full artifact fan-out.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the request fails or the backend rejects it.
    async fn extract_text(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ExtractedDocument, BackendError>;

    /// Turn the summary text into a narrated lecture video, returning its URL.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if generation fails.
    async fn generate_media(&self, text: &str) -> Result<String, BackendError>;

    /// Send the full transcript and receive the assistant's next reply.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the completion call fails.
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String, BackendError>;

    /// Fetch a fresh question set for the current lecture.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the fetch fails.
    async fn regenerate_quiz(&self) -> Result<Vec<QuizItem>, BackendError>;
}

/// HTTP implementation of `LectureBackend`.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response)
    }
}

#[async_trait]
impl LectureBackend for HttpBackend {
    async fn extract_text(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ExtractedDocument, BackendError> {
        let url = self.config.endpoint("extract-text");
        tracing::debug!(%url, file_name, size = bytes.len(), "uploading document");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("pdfFile", part);

        let response = self.client.post(url).multipart(form).send().await?;
        let body: ExtractTextResponse = Self::check_status(response)?.json().await?;

        Ok(ExtractedDocument {
            summary_text: body.text,
            raw_text: body.pdf_content,
            quiz: body.quiz,
            flashcards: body.flashcards,
            references: body.references,
        })
    }

    async fn generate_media(&self, text: &str) -> Result<String, BackendError> {
        let url = self.config.endpoint("generate-audio");
        tracing::debug!(%url, "requesting media generation");

        let response = self
            .client
            .post(url)
            .json(&GenerateMediaRequest { text })
            .send()
            .await?;
        let body: GenerateMediaResponse = Self::check_status(response)?.json().await?;
        Ok(body.video_url)
    }

    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String, BackendError> {
        let url = self.config.endpoint("get-response");
        tracing::debug!(%url, turns = messages.len(), "requesting chat completion");

        let response = self
            .client
            .post(url)
            .json(&ChatRequest { chat: messages })
            .send()
            .await?;
        let body: ChatResponse = Self::check_status(response)?.json().await?;
        Ok(body.gpt_response)
    }

    async fn regenerate_quiz(&self) -> Result<Vec<QuizItem>, BackendError> {
        let url = self.config.endpoint("new-quiz");
        tracing::debug!(%url, "fetching fresh quiz");

        let response = self.client.get(url).send().await?;
        let items: Vec<QuizItem> = Self::check_status(response)?.json().await?;
        Ok(items)
    }
}

//
// ─── WIRE SHAPES ───────────────────────────────────────────────────────────────
//

// Arrays default to empty so a backend that omits a section still loads the
// rest, matching the tolerant behavior users already rely on.
#[derive(Debug, Deserialize)]
struct ExtractTextResponse {
    #[serde(default)]
    text: String,
    #[serde(default, rename = "pdfContent")]
    pdf_content: String,
    #[serde(default)]
    quiz: Vec<QuizItem>,
    #[serde(default)]
    flashcards: Vec<Flashcard>,
    #[serde(default)]
    references: Vec<Reference>,
}

#[derive(Debug, Serialize)]
struct GenerateMediaRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateMediaResponse {
    #[serde(rename = "videoUrl")]
    video_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    chat: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(rename = "gptResponse")]
    gpt_response: String,
}
