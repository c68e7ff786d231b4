use dioxus::prelude::*;
use std::str::FromStr;

const STORAGE_KEY: &str = "sidebar-theme";

/// Colour themes offered in the settings modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::System => "Match system",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Theme state, initialized from localStorage on mount
pub fn use_theme() -> Signal<Theme> {
    let mut theme = use_signal(Theme::default);

    use_effect(move || {
        if let Some(saved) = load_theme() {
            theme.set(saved);
            spawn(apply_theme_css(saved));
        }
    });

    theme
}

#[cfg(target_arch = "wasm32")]
fn load_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()??.parse().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_theme() -> Option<Theme> {
    None
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub fn save_theme(theme: Theme) {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
            tracing::warn!("Failed to save theme: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme(_theme: Theme) {
    // No-op on server
}

/// Set the theme class on the document element
pub async fn apply_theme_css(theme: Theme) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('theme-system', 'theme-light', 'theme-dark');
            root.classList.add('theme-{}');
        }})()
    "#,
        theme.as_str()
    );

    if let Err(e) = document::eval(&script).await {
        tracing::debug!("Theme script not applied: {:?}", e);
    }
}
