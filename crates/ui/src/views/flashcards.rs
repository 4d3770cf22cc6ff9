use dioxus::prelude::*;

use lecture_core::model::Flashcard;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct FlashcardsData {
    cards: Vec<Flashcard>,
}

#[component]
pub fn FlashcardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();

    let mut position = use_signal(|| 0_usize);
    let mut flipped = use_signal(|| false);

    let resource = use_resource(move || {
        let sessions = sessions.clone();
        async move {
            let snapshot = sessions
                .load_snapshot()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(FlashcardsData {
                cards: snapshot.map(|s| s.flashcards).unwrap_or_default(),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page flashcards-page",
            header { class: "view-header",
                h2 { class: "view-title", "Flashcards" }
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
                ViewState::Ready(data) => {
                    if data.cards.is_empty() {
                        rsx! {
                            p { class: "flashcards-empty", "No flashcards available yet." }
                        }
                    } else {
                        // Navigation clamps into range; flipping never touches
                        // the question/answer pairing.
                        let count = data.cards.len();
                        let index = position().min(count - 1);
                        let card = data.cards[index].clone();
                        let face = if flipped() { card.answer } else { card.question };
                        let face_label = if flipped() { "Answer" } else { "Question" };
                        rsx! {
                            div { class: "flashcard-stage",
                                button {
                                    class: if flipped() { "flashcard flashcard--back" } else { "flashcard" },
                                    r#type: "button",
                                    onclick: move |_| {
                                        let current = flipped();
                                        flipped.set(!current);
                                    },
                                    span { class: "flashcard-face-label", "{face_label}" }
                                    span { class: "flashcard-text", "{face}" }
                                }
                                div { class: "flashcard-controls",
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        disabled: index == 0,
                                        onclick: move |_| {
                                            position.set(index.saturating_sub(1));
                                            flipped.set(false);
                                        },
                                        "Previous"
                                    }
                                    span { class: "flashcard-counter", "Card {index + 1} of {count}" }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        disabled: index + 1 >= count,
                                        onclick: move |_| {
                                            position.set(index + 1);
                                            flipped.set(false);
                                        },
                                        "Next"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
