use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::server_fns::sign_in;
use crate::shared::services::use_route_data;

/// Sign-in page shown after signing out
#[component]
pub fn SignIn() -> Element {
    let mut route_data = use_route_data();
    let navigator = use_navigator();
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_sign_in = move |_| {
        submitting.set(true);
        spawn(async move {
            match sign_in().await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "Signed in");
                    error.set(None);
                    route_data.refresh();
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {}", e);
                    error.set(Some("Sign-in failed. Please try again.".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        section { class: "c-page c-page--sign-in",
            h1 { class: "c-page__title", "Welcome back" }
            p { class: "c-page__subtitle", "Sign in to see your chats and credits." }
            button {
                class: "c-button c-button--primary",
                disabled: submitting(),
                onclick: on_sign_in,
                if submitting() { "Signing in..." } else { "Continue with demo account" }
            }
            if let Some(message) = error() {
                p { class: "c-error__text", "{message}" }
            }
        }
    }
}
