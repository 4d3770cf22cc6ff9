use std::sync::Arc;

use dioxus::prelude::*;

use lecture_core::model::{Role, Transcript};
use services::{ChatError, ChatService};

use crate::context::AppContext;

/// Sends the drafted message and appends the reply. The `sending` flag keeps
/// a second send from racing the first; the input stays disabled until the
/// reply (or the error) lands.
fn send_draft(
    chat_service: Arc<ChatService>,
    mut transcript: Signal<Transcript>,
    mut input: Signal<String>,
    mut sending: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    if sending() {
        return;
    }
    let draft = input();
    if draft.trim().is_empty() {
        return;
    }

    spawn(async move {
        sending.set(true);
        let mut current = transcript();
        match chat_service.send_message(&mut current, &draft).await {
            Ok(()) => {
                transcript.set(current);
                input.set(String::new());
                error.set(None);
            }
            Err(ChatError::Transcript(_)) => {}
            Err(err) => {
                // The user message is already appended and persisted; keep it
                // visible and surface the failure inline.
                transcript.set(current);
                input.set(String::new());
                error.set(Some(err.to_string()));
            }
        }
        sending.set(false);
    });
}

#[component]
pub fn ChatbotView() -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();
    let chat_service = ctx.chat_service();

    let mut transcript = use_signal(Transcript::default);
    let input = use_signal(String::new);
    let sending = use_signal(|| false);
    let error = use_signal(|| None::<String>);

    // Restore the persisted conversation once; fall back to a fresh seed so
    // the greeting shows even before any lecture is uploaded.
    use_future(move || {
        let sessions = sessions.clone();
        async move {
            let restored = match sessions.load_snapshot().await {
                Ok(Some(snapshot)) if !snapshot.transcript.is_empty() => snapshot.transcript,
                _ => Transcript::seeded(""),
            };
            transcript.set(restored);
        }
    });

    let chat_for_click = ctx.chat_service();
    let chat_for_key = chat_service;
    let mut input_for_edit = input;

    rsx! {
        div { class: "page chat-page",
            header { class: "view-header",
                h2 { class: "view-title", "Chatbot" }
            }

            div { class: "chat-log",
                for message in transcript().visible() {
                    div {
                        class: if message.role == Role::User { "chat-row chat-row--user" } else { "chat-row chat-row--assistant" },
                        p { class: "chat-bubble", "{message.content}" }
                    }
                }
                if sending() {
                    div { class: "chat-row chat-row--assistant",
                        p { class: "chat-bubble chat-bubble--pending", "..." }
                    }
                }
            }

            if let Some(message) = error() {
                p { class: "chat-error", "{message}" }
            }

            div { class: "chat-composer",
                input {
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Ask about your lecture...",
                    value: "{input()}",
                    disabled: sending(),
                    oninput: move |evt| input_for_edit.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send_draft(chat_for_key.clone(), transcript, input, sending, error);
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: sending(),
                    onclick: move |_| {
                        send_draft(chat_for_click.clone(), transcript, input, sending, error);
                    },
                    "Send"
                }
            }
        }
    }
}
