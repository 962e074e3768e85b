//! Wires a [`Carousel`] to its host: frame loop, input and effects.

use crate::carousel::Carousel;
use crate::policy::Effect;
use crate::ports::{FrameHandle, FrameScheduler, InputSource, RenderSink};
use std::cell::RefCell;
use std::rc::Rc;

/// A carousel attached to a host. Frame loops and input handlers hold their
/// own references, so dropping this does not stop the carousel; call
/// [`Mounted::unmount`] for that.
pub struct Mounted<R, H> {
    carousel: Rc<RefCell<Carousel<R>>>,
    main_loop: Option<H>,
    drag_loop: Rc<RefCell<Option<H>>>,
}

impl<R, H: FrameHandle> Mounted<R, H> {
    pub fn carousel(&self) -> Rc<RefCell<Carousel<R>>> {
        self.carousel.clone()
    }

    /// Cancel every frame loop this mount started.
    pub fn unmount(self) {
        if let Some(h) = self.main_loop {
            h.cancel();
        }
        if let Some(h) = self.drag_loop.borrow_mut().take() {
            h.cancel();
        }
    }
}

pub fn mount<R, F, I>(
    carousel: Carousel<R>,
    scheduler: F,
    input: &mut I,
) -> Mounted<R, F::Handle>
where
    R: RenderSink + 'static,
    F: FrameScheduler + 'static,
    F::Handle: 'static,
    I: InputSource,
{
    let continuous = carousel.runs_continuously();
    let carousel = Rc::new(RefCell::new(carousel));
    let scheduler = Rc::new(RefCell::new(scheduler));
    let drag_loop: Rc<RefCell<Option<F::Handle>>> = Rc::new(RefCell::new(None));

    carousel.borrow_mut().render();

    let main_loop = continuous.then(|| start_frames(&scheduler, &carousel));

    {
        let carousel = carousel.clone();
        let scheduler = scheduler.clone();
        let drag_loop = drag_loop.clone();
        input.connect(Box::new(move |event| {
            let effect = carousel.borrow_mut().handle(event);
            match effect {
                Effect::None => {}
                Effect::Redraw => carousel.borrow_mut().render(),
                Effect::BeginFrames => {
                    let handle = start_frames(&scheduler, &carousel);
                    if let Some(stale) = drag_loop.borrow_mut().replace(handle) {
                        stale.cancel();
                    }
                }
                Effect::EndFrames => {
                    if let Some(h) = drag_loop.borrow_mut().take() {
                        h.cancel();
                    }
                    carousel.borrow_mut().frame();
                }
            }
        }));
    }

    Mounted {
        carousel,
        main_loop,
        drag_loop,
    }
}

fn start_frames<R, F>(
    scheduler: &Rc<RefCell<F>>,
    carousel: &Rc<RefCell<Carousel<R>>>,
) -> F::Handle
where
    R: RenderSink + 'static,
    F: FrameScheduler,
{
    let carousel = carousel.clone();
    scheduler
        .borrow_mut()
        .start(Box::new(move || carousel.borrow_mut().frame()))
}
