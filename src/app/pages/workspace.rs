use dioxus::prelude::*;

// Pages linked from the sidebar's workspace section

#[component]
pub fn Documents() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Documents" }
            p { class: "c-page__subtitle", "Files you've shared with your chats." }
        }
    }
}

#[component]
pub fn Prompts() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Prompts" }
            p { class: "c-page__subtitle", "Saved prompts you can reuse in any chat." }
        }
    }
}

/// Plans and credit packs, linked from the credit summary
#[component]
pub fn Pricing() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Pricing" }
            ul { class: "c-pricing",
                li { class: "c-pricing__plan", strong { "Free" } " : limited monthly credits" }
                li { class: "c-pricing__plan", strong { "Pro" } " : monthly plan credits, renewed on the 1st" }
                li { class: "c-pricing__plan", strong { "Extra credits" } " : used once plan credits run out" }
            }
        }
    }
}
