use dioxus::prelude::*;

use crate::shared::state::PointerHit;

/// Report document-level mouse-downs while `is_open` is true.
///
/// The listener is registered when `is_open` becomes true and removed when it
/// turns false or the calling component is dropped. Each mouse-down is
/// reported with whether it landed inside the elements with `panel_id` and
/// `trigger_id`.
pub fn use_outside_click(
    is_open: bool,
    panel_id: &'static str,
    trigger_id: &'static str,
    on_pointer_down: Callback<PointerHit>,
) {
    // Dropping the guard unregisters the listener
    let mut listener = use_signal(|| None::<MouseDownListener>);

    use_effect(use_reactive!(|is_open| {
        if is_open {
            if listener.peek().is_none() {
                listener.set(MouseDownListener::register(panel_id, trigger_id, on_pointer_down));
            }
        } else if listener.peek().is_some() {
            listener.set(None);
        }
    }));
}

#[cfg(target_arch = "wasm32")]
pub struct MouseDownListener {
    document: web_sys::Document,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl MouseDownListener {
    fn register(
        panel_id: &'static str,
        trigger_id: &'static str,
        on_pointer_down: Callback<PointerHit>,
    ) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window()?.document()?;
        let lookup = document.clone();

        let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            let contains = |id: &str| {
                lookup
                    .get_element_by_id(id)
                    .map(|element| element.contains(target.as_ref()))
                    .unwrap_or(false)
            };
            on_pointer_down.call(PointerHit {
                inside_panel: contains(panel_id),
                inside_trigger: contains(trigger_id),
            });
        });

        if let Err(e) = document
            .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to register outside-click listener: {:?}", e);
            return None;
        }

        Some(Self { document, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for MouseDownListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self.document.remove_event_listener_with_callback(
            "mousedown",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

// No document outside the browser
#[cfg(not(target_arch = "wasm32"))]
pub struct MouseDownListener;

#[cfg(not(target_arch = "wasm32"))]
impl MouseDownListener {
    fn register(
        _panel_id: &'static str,
        _trigger_id: &'static str,
        _on_pointer_down: Callback<PointerHit>,
    ) -> Option<Self> {
        None
    }
}
