use coverflow_core::{FrameCallback, FrameHandle, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Frame scheduler backed by `requestAnimationFrame`.
pub struct RafScheduler;

pub struct RafHandle {
    tick: TickSlot,
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameHandle for RafHandle {
    fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Dropping the closure breaks the tick -> slot -> tick cycle.
        self.tick.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = RafHandle;

    fn start(&mut self, mut frame: FrameCallback) -> RafHandle {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let cancelled = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let cancelled_tick = cancelled.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if cancelled_tick.get() {
                return;
            }
            frame();
            pending_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        pending.set(request_frame(&tick));

        RafHandle {
            tick,
            cancelled,
            pending,
        }
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
