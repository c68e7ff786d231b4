use chrono::Local;
use dioxus::prelude::*;

use crate::app::components::{
    CreditSummary, DeleteChatModal, HistorySection, ProfileMenu, SectionHeader, SettingsModal,
};
use crate::app::routes::Route;
use crate::shared::services::{DioxusNavigation, ServerBackend, sidebar_flows, use_route_data};
use crate::shared::state::{SidebarState, StateCell};

/// Collapsible app sidebar: workspace links, chat history, credits and account
///
/// `collapsed` is owned by the layout; when set, only the expand button is
/// rendered but loads still follow the authentication state.
#[component]
pub fn Sidebar(
    collapsed: bool,
    on_toggle_collapse: EventHandler<()>,
    is_authenticated: bool,
    active_plan: Option<String>,
    subscription_loading: bool,
) -> Element {
    let mut state = use_signal(SidebarState::new);
    let route = use_route::<Route>();
    let mut current_route = use_signal(|| route.clone());
    let mut route_data = use_route_data();

    let active_chat = match &route {
        Route::Chat { id } => Some(id.clone()),
        _ => None,
    };

    let nav = use_context_provider(|| DioxusNavigation::new(navigator(), current_route, route_data));

    // Reload history and credits on sign-in, sign-out and route changes
    use_effect(use_reactive!(|(is_authenticated, route)| {
        current_route.set(route.clone());
        tracing::debug!(authenticated = is_authenticated, route = %route, "Refreshing sidebar");

        let tickets = state.mutate(|s| s.start_loads(is_authenticated));
        spawn(async move {
            sidebar_flows::run_loads(&state, &ServerBackend, tickets, Local::now()).await;
        });
    }));

    let snapshot = state.read().clone();
    let credits_loading = subscription_loading || (is_authenticated && snapshot.credits.is_none());
    let pending_title = snapshot
        .pending_delete
        .as_ref()
        .map(|item| item.title.clone())
        .unwrap_or_default();

    if collapsed {
        return rsx! {
            aside { class: "c-sidebar c-sidebar--collapsed",
                button {
                    class: "c-sidebar__expand",
                    title: "Open sidebar",
                    onclick: move |_| on_toggle_collapse.call(()),
                    "☰"
                }
            }
        };
    }

    rsx! {
        aside { class: "c-sidebar",
            div { class: "c-sidebar__header",
                Link {
                    to: Route::Home {},
                    class: "c-sidebar__brand",
                    "Chat"
                }
                button {
                    class: "c-sidebar__collapse",
                    title: "Close sidebar",
                    onclick: move |_| on_toggle_collapse.call(()),
                    "⟨"
                }
            }

            // Workspace links
            div { class: "c-sidebar__section",
                SectionHeader {
                    title: "Workspace".to_string(),
                    is_open: snapshot.workspace_open,
                    on_toggle: move |_| state.mutate(|s| s.toggle_workspace()),
                }
                if snapshot.workspace_open {
                    nav { class: "c-sidebar__nav",
                        Link {
                            to: Route::Documents {},
                            class: "c-sidebar__item",
                            span { class: "c-sidebar__item-icon", "📄" }
                            span { class: "c-sidebar__item-text", "Documents" }
                        }
                        Link {
                            to: Route::Prompts {},
                            class: "c-sidebar__item",
                            span { class: "c-sidebar__item-icon", "💡" }
                            span { class: "c-sidebar__item-text", "Prompts" }
                        }
                    }
                }
            }

            HistorySection { state, active_chat }

            div { class: "c-sidebar__footer",
                if is_authenticated {
                    CreditSummary {
                        credits: snapshot.credits,
                        loading: credits_loading,
                    }
                }
                ProfileMenu {
                    state,
                    is_authenticated,
                    active_plan: active_plan.clone(),
                }
            }

            SettingsModal {
                is_open: snapshot.settings_open,
                on_close: move |_| state.mutate(|s| s.close_settings()),
                on_settings_changed: move |_| route_data.refresh(),
            }

            DeleteChatModal {
                is_open: snapshot.delete_modal_open(),
                title: pending_title,
                is_deleting: snapshot.pending_delete_in_flight(),
                on_cancel: move |_| state.mutate(|s| s.cancel_delete()),
                on_confirm: move |_| {
                    spawn(async move {
                        let mut state = state;
                        let mut nav = nav;
                        sidebar_flows::confirm_delete(&mut state, &ServerBackend, &mut nav).await;
                    });
                },
            }
        }
    }
}
