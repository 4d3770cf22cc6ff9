use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    summary_text: String,
    media_url: Option<String>,
    has_content: bool,
}

/// Explicit upload state machine; replaces a string flag plus "is the page
/// empty?" side-channel checks.
#[derive(Clone, Debug, PartialEq, Eq)]
enum UploadState {
    Idle,
    Uploading,
    Succeeded,
    Failed(String),
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();
    let upload_service = ctx.upload_service();

    let mut upload_state = use_signal(|| UploadState::Idle);
    let mut media_warning = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let sessions = sessions.clone();
        async move {
            let snapshot = sessions
                .load_snapshot()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(match snapshot {
                Some(snapshot) => HomeData {
                    has_content: snapshot.session.has_content(),
                    summary_text: snapshot.session.summary_text,
                    media_url: snapshot.session.media_url,
                },
                None => HomeData {
                    summary_text: String::new(),
                    media_url: None,
                    has_content: false,
                },
            })
        }
    });

    let state = view_state_from_resource(&resource);
    let uploading = upload_state() == UploadState::Uploading;

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lecture Video Generator" }
                p { class: "view-subtitle",
                    "Upload a PDF or PPT file to generate a video explanation of your lecture."
                }
            }

            div { class: "upload-zone",
                label { class: "upload-label", r#for: "lecture-file",
                    span { class: "upload-hint", "Click to upload" }
                    span { class: "upload-types", "PPT or PDF" }
                }
                input {
                    id: "lecture-file",
                    class: "upload-input",
                    r#type: "file",
                    accept: ".pdf, .ppt, .pptx",
                    disabled: uploading,
                    onchange: move |evt| {
                        let Some(file) = evt.files().first().cloned() else {
                            return;
                        };
                        let upload_service = upload_service.clone();
                        let mut resource = resource;
                        spawn(async move {
                            let name = file.name();
                            let Ok(bytes) = file.read_bytes().await else {
                                upload_state.set(UploadState::Failed(
                                    "Could not read the selected file.".into(),
                                ));
                                return;
                            };
                            upload_state.set(UploadState::Uploading);
                            media_warning.set(None);
                            match upload_service.submit_document(&name, bytes.to_vec()).await {
                                Ok(outcome) => {
                                    media_warning.set(outcome.media_warning);
                                    upload_state.set(UploadState::Succeeded);
                                    resource.restart();
                                }
                                Err(err) => {
                                    upload_state.set(UploadState::Failed(err.to_string()));
                                }
                            }
                        });
                    },
                }
            }

            match upload_state() {
                UploadState::Uploading => rsx! {
                    p { class: "upload-status", "Generating video..." }
                },
                UploadState::Failed(message) => rsx! {
                    div { class: "banner banner--error", "Upload failed: {message}" }
                },
                UploadState::Idle | UploadState::Succeeded => rsx! {},
            }

            if let Some(warning) = media_warning() {
                div { class: "banner banner--warning", "{warning}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.has_content {
                        section { class: "card summary-card",
                            h3 { class: "card-title", "Speech Overview" }
                            p { class: "summary-text", "{data.summary_text}" }
                        }
                    }
                    if let Some(url) = data.media_url.as_ref() {
                        section { class: "card video-card",
                            h3 { class: "card-title", "Lecture Video" }
                            video { class: "lecture-video", controls: true, src: "{url}" }
                        }
                    }
                    NavCards {}
                },
            }
        }
    }
}

#[component]
fn NavCards() -> Element {
    rsx! {
        div { class: "nav-cards",
            Link { class: "nav-card nav-card--chatbot", to: Route::Chatbot {},
                h3 { "Chatbot" }
                p { "Ask questions and get answers about your lecture." }
            }
            Link { class: "nav-card nav-card--quiz", to: Route::Quiz {},
                h3 { "Quiz" }
                p { "Test your knowledge with interactive quiz questions." }
            }
            Link { class: "nav-card nav-card--flashcards", to: Route::Flashcards {},
                h3 { "Flashcards" }
                p { "Review important concepts using flashcards." }
            }
            Link { class: "nav-card nav-card--references", to: Route::FurtherKnowledge {},
                h3 { "Further Knowledge" }
                p { "Explore additional resources and references." }
            }
        }
    }
}
