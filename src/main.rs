//! Chat Sidebar - Main Entry Point
//!
//! Server builds load configuration, seed the in-memory store and serve the
//! Dioxus app. Uses dioxus::serve() pattern for dx serve compatibility.

use chat_sidebar::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        plan = config.demo_plan.as_deref().unwrap_or("free"),
        plan_credits = config.plan_credits,
        extra_credits = config.extra_credits,
        "Starting chat sidebar..."
    );

    chat_sidebar::infrastructure::init_store(&config);

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

#[cfg(feature = "server")]
fn load_config() -> anyhow::Result<chat_sidebar::config::AppConfig> {
    use anyhow::Context;

    chat_sidebar::config::AppConfig::from_env().context("Invalid sidebar configuration")
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Chat sidebar initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
