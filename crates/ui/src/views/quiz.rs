use dioxus::prelude::*;

use lecture_core::model::{OptionKey, Quiz};

use crate::context::AppContext;

fn option_class(item: &lecture_core::model::QuizItem, key: OptionKey) -> &'static str {
    if !item.answered {
        return "quiz-option";
    }
    if item.correct_answer == key {
        "quiz-option quiz-option--correct"
    } else if item.selected_option == Some(key) {
        "quiz-option quiz-option--wrong"
    } else {
        "quiz-option quiz-option--muted"
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();
    let quiz_service = ctx.quiz_service();

    let mut quiz = use_signal(Quiz::default);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_future(move || {
        let sessions = sessions.clone();
        async move {
            if let Ok(Some(snapshot)) = sessions.load_snapshot().await {
                quiz.set(Quiz::from_items(snapshot.quiz));
            }
        }
    });

    let quiz_for_reset = ctx.quiz_service();
    let current = quiz();
    let total = current.len();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
            }

            if let Some(message) = error() {
                div { class: "banner banner--error", "{message}" }
            }

            if current.is_empty() {
                p { class: "quiz-empty", "No quiz available yet. Upload a lecture first." }
            } else {
                div { class: "quiz-list",
                    for (index, item) in current.items().iter().cloned().enumerate() {
                        div { class: "quiz-question", key: "{index}",
                            p { class: "quiz-prompt", "{index + 1}. {item.question}" }
                            for option_key in OptionKey::ALL {
                                button {
                                    class: option_class(&item, option_key),
                                    r#type: "button",
                                    disabled: item.answered || busy(),
                                    onclick: {
                                        let quiz_service = quiz_service.clone();
                                        move |_| {
                                            if busy() {
                                                return;
                                            }
                                            let quiz_service = quiz_service.clone();
                                            spawn(async move {
                                                busy.set(true);
                                                let mut updated = quiz();
                                                match quiz_service
                                                    .answer(&mut updated, index, option_key)
                                                    .await
                                                {
                                                    Ok(_) => {
                                                        quiz.set(updated);
                                                        error.set(None);
                                                    }
                                                    Err(err) => {
                                                        error.set(Some(err.to_string()));
                                                    }
                                                }
                                                busy.set(false);
                                            });
                                        }
                                    },
                                    "{item.option_text(option_key)}"
                                }
                            }
                        }
                    }
                }
            }

            if current.is_complete() {
                section { class: "card quiz-results",
                    h3 { class: "card-title", "Quiz Completed!" }
                    p { class: "quiz-score", "Your score: {current.score()} / {total}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy(),
                        onclick: move |_| {
                            let quiz_service = quiz_for_reset.clone();
                            spawn(async move {
                                busy.set(true);
                                let mut updated = quiz();
                                match quiz_service.regenerate(&mut updated).await {
                                    Ok(()) => {
                                        quiz.set(updated);
                                        error.set(None);
                                    }
                                    Err(err) => {
                                        error.set(Some(err.to_string()));
                                    }
                                }
                                busy.set(false);
                            });
                        },
                        "Generate New Quiz"
                    }
                }
            }
        }
    }
}
