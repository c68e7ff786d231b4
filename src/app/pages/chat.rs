use dioxus::prelude::*;

#[component]
pub fn Chat(id: String) -> Element {
    rsx! {
        section { class: "c-page c-page--chat",
            h1 { class: "c-page__title", "Chat" }
            p { class: "c-page__meta", "Conversation {id}" }
        }
    }
}
