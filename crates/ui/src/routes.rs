use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChatbotView, FlashcardsView, FurtherKnowledgeView, HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/chatbot", ChatbotView)] Chatbot {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/flashcards", FlashcardsView)] Flashcards {},
        #[route("/further-knowledge", FurtherKnowledgeView)] FurtherKnowledge {},
}

#[component]
fn Layout() -> Element {
    let mut dark_mode = use_signal(|| false);
    let shell_class = if dark_mode() { "app app--dark" } else { "app" };

    rsx! {
        div { class: "{shell_class}",
            nav { class: "navbar",
                span { class: "navbar-brand", "LectureMate" }
                ul { class: "navbar-links",
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Chatbot {}, "Chatbot" } }
                    li { Link { to: Route::Quiz {}, "Quiz" } }
                    li { Link { to: Route::Flashcards {}, "Flashcards" } }
                    li { Link { to: Route::FurtherKnowledge {}, "Further Knowledge" } }
                }
                button {
                    class: "navbar-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let current = dark_mode();
                        dark_mode.set(!current);
                    },
                    if dark_mode() { "Light mode" } else { "Dark mode" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
