use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::Sidebar;
use crate::app::pages::{Chat, Documents, Home, Pricing, Prompts, SignIn};
use crate::domain::models::SessionStatus;
use crate::server_fns::get_session_status;
use crate::shared::services::RouteData;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // New chat landing page
    #[route("/")]
    Home {},
    #[route("/chat/:id")]
    Chat { id: String },
    #[route("/sign-in")]
    SignIn {},

    // Workspace pages
    #[route("/documents")]
    Documents {},
    #[route("/prompts")]
    Prompts {},
    #[route("/pricing")]
    Pricing {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Chat sidebar app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

/// App shell: resolves the session and owns the sidebar's collapsed flag
#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let mut collapsed = use_signal(|| false);
    let route_data = use_context_provider(|| RouteData::new(Signal::new(0)));

    let mut session = use_signal(SessionStatus::default);
    let mut session_loading = use_signal(|| true);

    // Re-resolve whenever route data is refreshed (sign-in, sign-out, settings)
    use_effect(move || {
        let token = route_data.token();
        spawn(async move {
            session_loading.set(true);
            match get_session_status().await {
                Ok(status) => session.set(status),
                Err(e) => {
                    tracing::warn!(token, "Failed to resolve session: {}", e);
                    session.set(SessionStatus::default());
                }
            }
            session_loading.set(false);
        });
    });

    let status = session();
    let layout_class = if collapsed() {
        "c-layout c-layout--collapsed"
    } else {
        "c-layout"
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "{layout_class}",
            Sidebar {
                collapsed: collapsed(),
                on_toggle_collapse: move |_| collapsed.set(!collapsed()),
                is_authenticated: status.authenticated,
                active_plan: status.active_plan.clone(),
                subscription_loading: session_loading(),
            }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
