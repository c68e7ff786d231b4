use dioxus::prelude::*;

use crate::shared::hooks::{Theme, apply_theme_css, save_theme, use_theme};

/// Settings panel opened from the profile menu
#[component]
pub fn SettingsModal(
    is_open: bool,
    on_close: EventHandler<()>,
    /// Called after a setting was saved
    on_settings_changed: EventHandler<()>,
) -> Element {
    let mut current_theme = use_theme();

    let mut select_theme = move |theme: Theme| {
        if current_theme() == theme {
            return;
        }
        current_theme.set(theme);
        save_theme(theme);
        spawn(apply_theme_css(theme));
        tracing::info!(theme = theme.as_str(), "Theme changed");
        on_settings_changed.call(());
    };

    if !is_open {
        return rsx! {};
    }

    rsx! {
        // Backdrop
        div {
            class: "c-modal__backdrop",
            onclick: move |_| on_close.call(()),
        }

        div { class: "c-modal c-settings", role: "dialog", "aria-modal": "true",
            div { class: "c-settings__header",
                h3 { class: "c-modal__title", "Settings" }
                button {
                    class: "c-settings__close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            div { class: "c-settings__group-label", "Theme" }
            div { class: "c-settings__options",
                for theme in Theme::ALL {
                    button {
                        key: "{theme.as_str()}",
                        class: if current_theme() == theme { "c-settings__option is-active" } else { "c-settings__option" },
                        onclick: move |_| select_theme(theme),
                        span { "{theme.display_name()}" }
                        if current_theme() == theme {
                            span { class: "c-settings__check", "✓" }
                        }
                    }
                }
            }
        }
    }
}
