use dioxus::prelude::*;

use lecture_core::model::Reference;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct ReferencesData {
    references: Vec<Reference>,
}

#[component]
pub fn FurtherKnowledgeView() -> Element {
    let ctx = use_context::<AppContext>();
    let sessions = ctx.sessions();

    let resource = use_resource(move || {
        let sessions = sessions.clone();
        async move {
            let snapshot = sessions
                .load_snapshot()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(ReferencesData {
                references: snapshot.map(|s| s.references).unwrap_or_default(),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page references-page",
            header { class: "view-header",
                h2 { class: "view-title", "Further Knowledge" }
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
                    if data.references.is_empty() {
                        p { class: "references-empty", "No references available yet." }
                    } else {
                        ul { class: "reference-list",
                            for reference in data.references {
                                li { class: "reference-item",
                                    a {
                                        class: "reference-link",
                                        href: "{reference.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{reference.url}"
                                    }
                                    p { class: "reference-description", "{reference.description}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
