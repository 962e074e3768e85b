// Tuning constants shared by the core and the web frontend.

// Easing
pub const DAMPING: f64 = 0.1; // fraction of the remaining distance covered per frame
pub const SNAP_EPSILON: f64 = 1e-3; // below this distance progress snaps onto the target

// Dragging
pub const DRAG_SENSITIVITY_PX: f64 = 300.0; // pointer travel for one full card step
pub const ELASTIC_MARGIN: f64 = 0.5; // free overshoot past the first/last card
pub const ELASTIC_LEAK: f64 = 0.2; // share of the excursion past the margin that is applied
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // net travel needed for a discrete step
pub const CLICK_SLOP_PX: f64 = 8.0; // drags longer than this swallow the trailing click

// Projection
pub const CULL_DISTANCE: f64 = 3.0; // cards further than this from center are hidden
pub const ACTIVE_THRESHOLD: f64 = 0.3; // |diff| below this gets the active styling
pub const CLICK_TOLERANCE: f64 = 0.1; // card clicks this close to progress are ignored

// Stacking order: closest card on top
pub const STACKING_BASE: f64 = 100.0;
pub const STACKING_FALLOFF: f64 = 10.0;
