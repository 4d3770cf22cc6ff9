use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use lecture_core::Clock;
use lecture_core::model::{ChatMessage, QuizItem};
use lecture_core::time::fixed_now;
use services::{
    AppServices, BackendError, ChatService, ExtractedDocument, LectureBackend, QuizService,
    SessionRepository, UploadService,
};
use storage::repository::{InMemorySessionStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{ChatbotView, FlashcardsView, FurtherKnowledgeView, HomeView, QuizView};

/// Backend stub for render tests; no view under smoke test should reach the
/// network.
struct NoopBackend;

#[async_trait]
impl LectureBackend for NoopBackend {
    async fn extract_text(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<ExtractedDocument, BackendError> {
        Ok(ExtractedDocument::default())
    }

    async fn generate_media(&self, _text: &str) -> Result<String, BackendError> {
        Ok(String::new())
    }

    async fn chat_completion(&self, _messages: &[ChatMessage]) -> Result<String, BackendError> {
        Ok(String::new())
    }

    async fn regenerate_quiz(&self) -> Result<Vec<QuizItem>, BackendError> {
        Ok(Vec::new())
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.services.sessions()
    }

    fn upload_service(&self) -> Arc<UploadService> {
        self.services.upload_service()
    }

    fn chat_service(&self) -> Arc<ChatService> {
        self.services.chat_service()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz_service()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Chatbot,
    Quiz,
    Flashcards,
    FurtherKnowledge,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Chatbot => rsx! { ChatbotView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Flashcards => rsx! { FlashcardsView {} },
        ViewKind::FurtherKnowledge => rsx! { FurtherKnowledgeView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: InMemorySessionStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned futures (store loads) complete and apply their updates.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let store = InMemorySessionStore::new();
    let storage = Storage {
        sessions: Arc::new(store.clone()),
    };
    let services = AppServices::new(
        &storage,
        Arc::new(NoopBackend) as Arc<dyn LectureBackend>,
        Clock::fixed(fixed_now()),
    );

    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, store }
}
