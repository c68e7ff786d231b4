use dioxus::prelude::*;

// Placeholder rows while a list is loading (BEM: c-skeleton)
#[component]
pub fn LoadingRows(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div { class: "c-skeleton", "aria-busy": "true",
            for i in 0..count {
                div { key: "{i}", class: "c-skeleton__row" }
            }
        }
    }
}

// Inline error text (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            p { class: "c-error__text", "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "c-empty-state", "{message}" }
    }
}

/// Collapsible section header with a chevron
#[component]
pub fn SectionHeader(title: String, is_open: bool, on_toggle: EventHandler<()>) -> Element {
    let chevron_class = if is_open {
        "c-sidebar__chevron"
    } else {
        "c-sidebar__chevron c-sidebar__chevron--closed"
    };

    rsx! {
        button {
            class: "c-sidebar__section-header",
            "aria-expanded": "{is_open}",
            onclick: move |_| on_toggle.call(()),
            span { class: "c-sidebar__section-title", "{title}" }
            span { class: "{chevron_class}", "▾" }
        }
    }
}
