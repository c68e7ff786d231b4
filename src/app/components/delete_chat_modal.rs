use dioxus::prelude::*;

/// Confirmation dialog for deleting a chat
///
/// Reports the user's choice through callbacks; the caller owns all state.
#[component]
pub fn DeleteChatModal(
    is_open: bool,
    /// Title of the chat pending deletion
    title: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    /// Disables the confirm button while a delete call is running
    #[props(default = false)]
    is_deleting: bool,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "c-modal__backdrop",
            onclick: move |_| on_cancel.call(()),
        }
        div {
            class: "c-modal",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_cancel.call(());
                }
            },
            h3 { class: "c-modal__title", "Delete chat?" }
            p { class: "c-modal__body",
                "This will permanently delete "
                strong { "\"{title}\"" }
                "."
            }
            div { class: "c-modal__actions",
                button {
                    class: "c-modal__btn c-modal__btn--cancel",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_cancel.call(());
                    },
                    "Cancel"
                }
                button {
                    class: "c-modal__btn c-modal__btn--danger",
                    disabled: is_deleting,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_confirm.call(());
                    },
                    if is_deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
