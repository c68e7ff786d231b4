use dioxus::prelude::*;

use crate::app::components::common::{EmptyState, ErrorMessage, LoadingRows, SectionHeader};
use crate::app::routes::Route;
use crate::domain::models::ChatHistoryItem;
use crate::shared::services::{DioxusNavigation, ServerBackend, sidebar_flows};
use crate::shared::state::{DeletionStatus, HistoryView, SidebarState, StateCell};
use crate::shared::utils::prompt_for_title;

/// "Chats" section: new-chat link, failure notice and the history rows
#[component]
pub fn HistorySection(
    state: Signal<SidebarState>,
    /// Chat shown in the main pane, highlighted in the list
    active_chat: Option<String>,
) -> Element {
    let nav = use_context::<DioxusNavigation>();
    let mut state = state;

    let is_open = state.read().history_open;
    let history = state.read().history.clone();
    let notice = state.read().notice.clone();

    let on_open = move |id: String| {
        let mut nav = nav;
        sidebar_flows::open_chat(&state, &mut nav, &id);
    };

    let on_rename = move |item: ChatHistoryItem| {
        // Synchronous browser prompt, answered before anything is spawned
        let input = prompt_for_title(&item.title);
        spawn(async move {
            let mut state = state;
            sidebar_flows::rename_chat(&mut state, &ServerBackend, &item.id, input).await;
        });
    };

    let on_delete = move |item: ChatHistoryItem| {
        state.mutate(|s| s.request_delete(&item));
    };

    let list = match history.view() {
        HistoryView::Loading => rsx! { LoadingRows {} },
        HistoryView::Error(message) => rsx! {
            ErrorMessage { message: message.to_string() }
        },
        HistoryView::Empty => rsx! {
            EmptyState { message: "No chats yet".to_string() }
        },
        HistoryView::Items(items) => rsx! {
            for item in items.iter().cloned() {
                HistoryRow {
                    key: "{item.id}",
                    is_active: active_chat.as_deref() == Some(item.id.as_str()),
                    status: state.read().deletion_status(&item.id),
                    item,
                    on_open,
                    on_rename,
                    on_delete,
                }
            }
        },
    };

    rsx! {
        div { class: "c-sidebar__section c-sidebar__section--history",
            SectionHeader {
                title: "Chats".to_string(),
                is_open,
                on_toggle: move |_| state.mutate(|s| s.toggle_history()),
            }

            Link {
                to: Route::Home {},
                class: "c-sidebar__item c-sidebar__item--new-chat",
                span { class: "c-sidebar__item-icon", "＋" }
                span { class: "c-sidebar__item-text", "New chat" }
            }

            if let Some(message) = notice {
                div { class: "c-sidebar__notice", role: "status",
                    span { class: "c-sidebar__notice-text", "{message}" }
                    button {
                        class: "c-sidebar__notice-dismiss",
                        title: "Dismiss",
                        onclick: move |_| state.mutate(|s| s.dismiss_notice()),
                        "✕"
                    }
                }
            }

            if is_open {
                nav { class: "c-sidebar__history",
                    {list}
                }
            }
        }
    }
}

/// One chat in the history list with its rename and delete actions
#[component]
fn HistoryRow(
    item: ChatHistoryItem,
    is_active: bool,
    status: DeletionStatus,
    on_open: EventHandler<String>,
    on_rename: EventHandler<ChatHistoryItem>,
    on_delete: EventHandler<ChatHistoryItem>,
) -> Element {
    let deleting = status == DeletionStatus::Deleting;

    let mut row_class = String::from("c-session-item");
    if is_active {
        row_class.push_str(" c-session-item--active");
    }
    if deleting {
        row_class.push_str(" c-session-item--deleting");
    }

    let open_id = item.id.clone();
    let rename_item = item.clone();
    let delete_item = item.clone();

    rsx! {
        div { class: "{row_class}",
            button {
                class: "c-session-item__link",
                title: "{item.title}",
                disabled: deleting,
                onclick: move |_| on_open.call(open_id.clone()),
                span { class: "c-session-item__icon", "💬" }
                span { class: "c-session-item__title", "{item.title}" }
            }

            div { class: "c-session-item__actions",
                button {
                    class: "c-session-item__action",
                    title: "Rename",
                    disabled: deleting,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_rename.call(rename_item.clone());
                    },
                    "✎"
                }
                button {
                    class: "c-session-item__action c-session-item__action--delete",
                    title: "Delete",
                    disabled: deleting,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(delete_item.clone());
                    },
                    if deleting { "..." } else { "🗑️" }
                }
            }
        }
    }
}
