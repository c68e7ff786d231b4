/// Ask the user for a new chat title, pre-filled with the current one.
///
/// Blocks until the browser prompt is answered. Returns `None` when it was
/// dismissed.
#[cfg(target_arch = "wasm32")]
pub fn prompt_for_title(current: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message_and_default("Rename chat", current) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("Rename prompt failed: {:?}", e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prompt_for_title(_current: &str) -> Option<String> {
    None
}
