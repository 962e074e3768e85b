use coverflow_core::{InputEvent, InputHandler, InputSource, PointerId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedHandler = Rc<RefCell<InputHandler>>;

/// DOM event source: pointer drags on the container, clicks on cards and
/// dots, arrow keys on the document.
pub struct DomInput {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
    pub dots: Vec<web::HtmlElement>,
}

impl InputSource for DomInput {
    fn connect(&mut self, handler: InputHandler) {
        let handler: SharedHandler = Rc::new(RefCell::new(handler));
        wire_pointerdown(&self.container, handler.clone());
        wire_window_pointer(handler.clone());
        for (index, card) in self.cards.iter().enumerate() {
            wire_click(card, InputEvent::CardClick(index), handler.clone());
        }
        for (index, dot) in self.dots.iter().enumerate() {
            wire_click(dot, InputEvent::DotClick(index), handler.clone());
        }
        super::keyboard::wire_keydown(&self.document, handler);
    }
}

#[inline]
pub(super) fn dispatch(handler: &SharedHandler, event: InputEvent) {
    (handler.borrow_mut().as_mut())(event);
}

fn wire_pointerdown(container: &web::HtmlElement, handler: SharedHandler) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Stop mouse drags from selecting text or dragging images.
        if ev.pointer_type() == "mouse" {
            ev.prevent_default();
        }
        dispatch(
            &handler,
            InputEvent::PointerDown {
                id: ev.pointer_id(),
                x: ev.client_x() as f64,
            },
        );
    }) as Box<dyn FnMut(_)>);
    _ = container
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Move and release are tracked on the window so a drag keeps working when
// the pointer leaves the container.
fn wire_window_pointer(handler: SharedHandler) {
    let Some(window) = web::window() else {
        log::error!("[input] no window; drag input disabled");
        return;
    };
    let listeners: [(&str, fn(PointerId, f64) -> InputEvent); 3] = [
        ("pointermove", |id, x| InputEvent::PointerMove { id, x }),
        ("pointerup", |id, x| InputEvent::PointerUp { id, x }),
        ("pointercancel", |id, x| InputEvent::PointerUp { id, x }),
    ];
    for (name, to_event) in listeners {
        let handler = handler.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                dispatch(&handler, to_event(ev.pointer_id(), ev.client_x() as f64));
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_click(target: &web::HtmlElement, event: InputEvent, handler: SharedHandler) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dispatch(&handler, event);
    }) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
