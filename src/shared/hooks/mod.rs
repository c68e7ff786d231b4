// Custom Dioxus hooks
pub mod use_outside_click;
pub mod use_theme;

pub use use_outside_click::use_outside_click;
pub use use_theme::{Theme, apply_theme_css, save_theme, use_theme};
