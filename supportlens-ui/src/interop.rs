use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Document-level `keydown` listener for one key. Removed on drop.
pub struct KeyListener {
    document: Document,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

/// Call `on_key` whenever `key` (a `KeyboardEvent.key` value such as
/// `"Escape"`) is pressed anywhere in the document.
pub fn listen_for_key<F>(key: &'static str, mut on_key: F) -> Option<KeyListener>
where
    F: FnMut() + 'static,
{
    let document = web_sys::window()?.document()?;

    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() == key {
            on_key();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    if let Err(e) =
        document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
    {
        dioxus_logger::tracing::warn!("Failed to register {} listener: {:?}", key, e);
        return None;
    }

    Some(KeyListener { document, callback })
}

/// Smooth-scroll the element with `id` into view, if it is mounted.
pub fn scroll_to_element_id(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::End);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
