use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use lecture_core::Clock;
use lecture_core::model::{ChatMessage, Flashcard, OptionKey, QuizItem, Reference, Role};
use lecture_core::time::fixed_now;
use services::{BackendError, ExtractedDocument, LectureBackend, UploadError, UploadService};
use storage::repository::{InMemorySessionStore, SessionRepository};

struct FakeBackend {
    fail_extraction: AtomicBool,
    fail_media: AtomicBool,
}

impl FakeBackend {
    fn new() -> Self {
        Self {
            fail_extraction: AtomicBool::new(false),
            fail_media: AtomicBool::new(false),
        }
    }

    fn document() -> ExtractedDocument {
        ExtractedDocument {
            summary_text: "A short summary.".into(),
            raw_text: "The full lecture text.".into(),
            quiz: vec![QuizItem {
                question: "Q1".into(),
                option_a: "A".into(),
                option_b: "B".into(),
                option_c: "C".into(),
                option_d: "D".into(),
                correct_answer: OptionKey::B,
                answered: true,
                selected_option: Some(OptionKey::C),
            }],
            flashcards: vec![Flashcard {
                question: "FQ".into(),
                answer: "FA".into(),
            }],
            references: vec![Reference {
                url: "https://example.com".into(),
                description: "ref".into(),
            }],
        }
    }
}

fn http_error() -> BackendError {
    BackendError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl LectureBackend for FakeBackend {
    async fn extract_text(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<ExtractedDocument, BackendError> {
        if self.fail_extraction.load(Ordering::SeqCst) {
            return Err(http_error());
        }
        Ok(Self::document())
    }

    async fn generate_media(&self, _text: &str) -> Result<String, BackendError> {
        if self.fail_media.load(Ordering::SeqCst) {
            return Err(http_error());
        }
        Ok("https://cdn.example/lecture.mp4".into())
    }

    async fn chat_completion(&self, _messages: &[ChatMessage]) -> Result<String, BackendError> {
        Ok("reply".into())
    }

    async fn regenerate_quiz(&self) -> Result<Vec<QuizItem>, BackendError> {
        Ok(Vec::new())
    }
}

fn build_service() -> (Arc<FakeBackend>, InMemorySessionStore, UploadService) {
    let backend = Arc::new(FakeBackend::new());
    let store = InMemorySessionStore::new();
    let service = UploadService::new(
        Clock::fixed(fixed_now()),
        Arc::clone(&backend) as Arc<dyn LectureBackend>,
        Arc::new(store.clone()),
    );
    (backend, store, service)
}

#[tokio::test]
async fn successful_upload_stores_all_artifacts() {
    let (_backend, store, service) = build_service();

    let outcome = service
        .submit_document("lecture.pdf", b"%PDF".to_vec())
        .await
        .unwrap();

    assert!(outcome.media_warning.is_none());
    assert_eq!(
        outcome.snapshot.session.media_url.as_deref(),
        Some("https://cdn.example/lecture.mp4")
    );

    let stored = store.load_snapshot().await.unwrap().expect("snapshot");
    assert_eq!(stored.session.summary_text, "A short summary.");
    assert_eq!(stored.session.raw_document_text, "The full lecture text.");
    assert_eq!(stored.flashcards.len(), 1);
    assert_eq!(stored.references.len(), 1);

    // Quiz items start unanswered even when the payload carried stale state.
    assert_eq!(stored.quiz.len(), 1);
    assert!(!stored.quiz[0].answered);
    assert_eq!(stored.quiz[0].selected_option, None);

    // Transcript is seeded with the document text plus the greeting.
    assert_eq!(stored.transcript.len(), 2);
    assert_eq!(stored.transcript.messages()[0].role, Role::System);
    assert!(
        stored.transcript.messages()[0]
            .content
            .contains("The full lecture text.")
    );
}

#[tokio::test]
async fn extraction_failure_stores_nothing() {
    let (backend, store, service) = build_service();
    backend.fail_extraction.store(true, Ordering::SeqCst);

    let err = service
        .submit_document("lecture.pdf", b"%PDF".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Extraction(_)));
    assert!(store.load_snapshot().await.unwrap().is_none());
}

#[tokio::test]
async fn media_failure_keeps_artifacts_and_warns() {
    let (backend, store, service) = build_service();
    backend.fail_media.store(true, Ordering::SeqCst);

    let outcome = service
        .submit_document("lecture.pdf", b"%PDF".to_vec())
        .await
        .unwrap();

    assert!(outcome.media_warning.is_some());
    assert_eq!(outcome.snapshot.session.media_url, None);

    let stored = store.load_snapshot().await.unwrap().expect("snapshot");
    assert_eq!(stored.quiz.len(), 1);
    assert_eq!(stored.flashcards.len(), 1);
    assert_eq!(stored.session.media_url, None);
}

#[tokio::test]
async fn new_upload_replaces_session_and_discards_chat() {
    let (_backend, store, service) = build_service();

    service
        .submit_document("first.pdf", b"%PDF".to_vec())
        .await
        .unwrap();

    // Simulate a conversation on the first lecture.
    let mut transcript = store
        .load_snapshot()
        .await
        .unwrap()
        .expect("snapshot")
        .transcript;
    transcript.push_user("old question").unwrap();
    transcript.push_assistant("old answer");
    store.save_transcript(&transcript).await.unwrap();

    service
        .submit_document("second.pdf", b"%PDF".to_vec())
        .await
        .unwrap();

    let stored = store.load_snapshot().await.unwrap().expect("snapshot");
    assert_eq!(stored.transcript.len(), 2);
    assert!(
        stored
            .transcript
            .visible()
            .all(|m| m.content != "old question")
    );
}
