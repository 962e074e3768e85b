use super::pointer::{dispatch, SharedHandler};
use coverflow_core::{InputEvent, NavKey};
use wasm_bindgen::JsCast;
use web_sys as web;

// Arrow keys step through items; every other key is left to the page.
pub fn wire_keydown(document: &web::Document, handler: SharedHandler) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            dispatch(&handler, InputEvent::Key(key));
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
