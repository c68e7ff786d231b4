use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::domain::models::plan_label;
use crate::shared::hooks::use_outside_click;
use crate::shared::services::{DioxusNavigation, ServerBackend, sidebar_flows};
use crate::shared::state::{PointerHit, SidebarState, StateCell};

const PANEL_ID: &str = "sidebar-profile-menu";
const TRIGGER_ID: &str = "sidebar-profile-trigger";

/// Account button at the bottom of the sidebar and the menu it opens
#[component]
pub fn ProfileMenu(
    state: Signal<SidebarState>,
    is_authenticated: bool,
    active_plan: Option<String>,
) -> Element {
    let nav = use_context::<DioxusNavigation>();
    let mut state = state;

    let is_open = state.read().profile_menu.is_open();
    let user = state.read().user.clone();
    let plan = plan_label(active_plan.as_deref());

    let on_pointer_down = use_callback(move |hit: PointerHit| {
        state.mutate(|s| s.handle_pointer_down(hit));
    });
    use_outside_click(is_open, PANEL_ID, TRIGGER_ID, on_pointer_down);

    if !is_authenticated {
        return rsx! {
            div { class: "c-profile",
                Link {
                    to: Route::SignIn {},
                    class: "c-profile__sign-in",
                    "Sign in"
                }
            }
        };
    }

    let (initial, name, email) = match &user {
        Some(user) => (user.initial(), user.display_name.clone(), user.email.clone()),
        None => ("?".to_string(), "Account".to_string(), String::new()),
    };

    rsx! {
        div {
            class: "c-profile",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    state.mutate(|s| s.close_profile_menu());
                }
            },

            if is_open {
                div { id: PANEL_ID, class: "c-profile__menu", role: "menu",
                    if !email.is_empty() {
                        div { class: "c-profile__email", "{email}" }
                    }
                    button {
                        class: "c-profile__menu-item",
                        role: "menuitem",
                        onclick: move |_| state.mutate(|s| s.open_settings()),
                        "⚙️ Settings"
                    }
                    button {
                        class: "c-profile__menu-item c-profile__menu-item--danger",
                        role: "menuitem",
                        onclick: move |_| {
                            spawn(async move {
                                let mut state = state;
                                let mut nav = nav;
                                sidebar_flows::sign_out(&mut state, &ServerBackend, &mut nav).await;
                            });
                        },
                        "↪ Sign out"
                    }
                }
            }

            button {
                id: TRIGGER_ID,
                class: "c-profile__trigger",
                "aria-haspopup": "menu",
                "aria-expanded": "{is_open}",
                onclick: move |_| state.mutate(|s| s.toggle_profile_menu()),
                span { class: "c-profile__avatar", "{initial}" }
                span { class: "c-profile__name", "{name}" }
                span { class: "c-profile__plan", "{plan}" }
            }
        }
    }
}
