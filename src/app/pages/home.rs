use dioxus::prelude::*;

/// Landing page for a new conversation
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-page c-page--home",
            h1 { class: "c-page__title", "What can I help with?" }
            p { class: "c-page__subtitle",
                "Start a new chat or pick one from the sidebar."
            }
        }
    }
}
