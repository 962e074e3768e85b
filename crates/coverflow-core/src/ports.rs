//! Interfaces to the host environment. The core never touches a concrete
//! renderer, frame clock or event source; it talks to these instead.

use crate::catalog::Item;
use crate::input::InputEvent;
use crate::projector::CardCommand;

/// Receives render output.
pub trait RenderSink {
    /// Apply the style (or hiding) of card `index`.
    fn card(&mut self, index: usize, command: &CardCommand);

    /// Mark indicator `active` selected and clear all others.
    fn indicator(&mut self, active: usize);

    /// Show `item`'s title and year. Only called when the shown item changes.
    fn caption(&mut self, item: &Item);

    /// Drag feedback, e.g. a grabbing cursor.
    fn grabbing(&mut self, _dragging: bool) {}
}

/// Cancels a frame loop started by [`FrameScheduler::start`].
pub trait FrameHandle {
    fn cancel(&self);
}

pub type FrameCallback = Box<dyn FnMut()>;

/// Runs a callback once per display frame until its handle is cancelled.
pub trait FrameScheduler {
    type Handle: FrameHandle;

    fn start(&mut self, frame: FrameCallback) -> Self::Handle;
}

pub type InputHandler = Box<dyn FnMut(InputEvent)>;

/// Delivers normalized input events to a single handler.
pub trait InputSource {
    fn connect(&mut self, handler: InputHandler);
}
