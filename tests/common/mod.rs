// Headless stand-ins for the browser: a sink that records render output, a
// frame scheduler pumped by hand and an input source driven by the test.

#![allow(dead_code)]

use coverflow_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
pub struct RecordingSink {
    pub cards: Vec<Option<CardCommand>>,
    pub active_dot: Option<usize>,
    /// `(title, year)` of every caption sent.
    pub captions: Vec<(String, String)>,
    pub grabbing: bool,
    pub passes: usize,
}

impl RenderSink for RecordingSink {
    fn card(&mut self, index: usize, command: &CardCommand) {
        if self.cards.len() <= index {
            self.cards.resize(index + 1, None);
        }
        self.cards[index] = Some(*command);
    }

    fn indicator(&mut self, active: usize) {
        self.active_dot = Some(active);
        self.passes += 1;
    }

    fn caption(&mut self, item: &Item) {
        self.captions
            .push((item.title.clone(), item.year.clone()));
    }

    fn grabbing(&mut self, dragging: bool) {
        self.grabbing = dragging;
    }
}

impl RecordingSink {
    pub fn titles(&self) -> Vec<&str> {
        self.captions.iter().map(|(title, _)| title.as_str()).collect()
    }

    pub fn last_caption(&self) -> Option<(&str, &str)> {
        self.captions
            .last()
            .map(|(title, year)| (title.as_str(), year.as_str()))
    }
}

struct Slot {
    cancelled: Rc<Cell<bool>>,
    frame: Rc<RefCell<FrameCallback>>,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    slots: Rc<RefCell<Vec<Slot>>>,
}

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl FrameHandle for ManualHandle {
    fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn start(&mut self, frame: FrameCallback) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.slots.borrow_mut().push(Slot {
            cancelled: cancelled.clone(),
            frame: Rc::new(RefCell::new(frame)),
        });
        ManualHandle { cancelled }
    }
}

impl ManualScheduler {
    /// Run `frames` display frames across every live loop.
    pub fn pump(&self, frames: usize) {
        for _ in 0..frames {
            let live: Vec<_> = self
                .slots
                .borrow()
                .iter()
                .filter(|s| !s.cancelled.get())
                .map(|s| s.frame.clone())
                .collect();
            for frame in live {
                (frame.borrow_mut().as_mut())();
            }
        }
    }

    pub fn live_loops(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|s| !s.cancelled.get())
            .count()
    }
}

#[derive(Clone, Default)]
pub struct ScriptedInput {
    handler: Rc<RefCell<Option<InputHandler>>>,
}

impl InputSource for ScriptedInput {
    fn connect(&mut self, handler: InputHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }
}

impl ScriptedInput {
    pub fn emit(&self, event: InputEvent) {
        if let Some(handler) = self.handler.borrow_mut().as_mut() {
            handler(event);
        }
    }
}

pub fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("Item {}", i), format!("{}", 2000 + i), None))
        .collect()
}

pub fn carousel(count: usize, config: CarouselConfig) -> Carousel<RecordingSink> {
    Carousel::new(items(count), config, RecordingSink::default()).unwrap()
}

pub struct Harness {
    pub mounted: Mounted<RecordingSink, ManualHandle>,
    pub frames: ManualScheduler,
    pub input: ScriptedInput,
}

impl Harness {
    pub fn new(count: usize, policy: PolicyKind) -> Self {
        let frames = ManualScheduler::default();
        let mut input = ScriptedInput::default();
        let mounted = mount(
            carousel(count, CarouselConfig::with_policy(policy)),
            frames.clone(),
            &mut input,
        );
        Self {
            mounted,
            frames,
            input,
        }
    }

    pub fn state(&self) -> ProgressState {
        let carousel = self.mounted.carousel();
        let state = carousel.borrow().state().clone();
        state
    }

    pub fn with_sink<T>(&self, f: impl FnOnce(&RecordingSink) -> T) -> T {
        let carousel = self.mounted.carousel();
        let result = f(carousel.borrow().renderer());
        result
    }
}
