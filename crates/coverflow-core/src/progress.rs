//! Scalar navigation state and the arithmetic that moves it.
//!
//! `current` is the fractional index at the center of the view (0 = first
//! item centered). Navigation only ever writes `target`; `ease` walks
//! `current` toward it once per frame unless a drag is driving it directly.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressState {
    pub current: f64,
    pub target: f64,
    pub dragging: bool,
    pub drag_origin_x: f64,
    pub drag_origin_progress: f64,
    /// Largest pointer distance from the drag origin seen during this gesture.
    pub drag_travel_px: f64,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, x: f64) {
        self.dragging = true;
        self.drag_origin_x = x;
        self.drag_origin_progress = self.current;
        self.drag_travel_px = 0.0;
    }

    /// Record a pointer position during a drag and return its displacement
    /// from the drag origin.
    pub fn track_pointer(&mut self, x: f64) -> f64 {
        let delta = x - self.drag_origin_x;
        self.drag_travel_px = self.drag_travel_px.max(delta.abs());
        delta
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Set the target, clamped to a valid index.
    pub fn set_target(&mut self, index: f64, count: usize) {
        self.target = clamp_index(index, count);
    }

    /// Jump straight to `index` with no easing.
    pub fn snap_to(&mut self, index: f64, count: usize) {
        self.set_target(index, count);
        self.current = self.target;
    }

    /// One frame of exponential approach toward `target`. Returns whether
    /// `current` changed. Does nothing while dragging.
    pub fn ease(&mut self, damping: f64, epsilon: f64) -> bool {
        if self.dragging || self.current == self.target {
            return false;
        }
        self.current += (self.target - self.current) * damping;
        if (self.target - self.current).abs() < epsilon {
            self.current = self.target;
        }
        true
    }

    pub fn is_settled(&self) -> bool {
        !self.dragging && self.current == self.target
    }
}

/// Round with halves going toward positive infinity (`2.5 -> 3`, `-0.5 -> 0`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Clamp a progress value into `[0, count - 1]`.
#[inline]
pub fn clamp_index(value: f64, count: usize) -> f64 {
    let max = count.saturating_sub(1) as f64;
    value.clamp(0.0, max)
}

/// Progress implied by the pointer at `x` for a drag that started at
/// `origin_x` with progress `origin_progress`. Dragging left advances.
#[inline]
pub fn drag_progress(origin_progress: f64, origin_x: f64, x: f64, sensitivity_px: f64) -> f64 {
    origin_progress - (x - origin_x) / sensitivity_px
}

/// Rubber-band `value` against `[min, max]`: inside the range it passes
/// through, outside only `leak` of the excursion is kept.
#[inline]
pub fn rubber_band(value: f64, min: f64, max: f64, leak: f64) -> f64 {
    if value < min {
        min + (value - min) * leak
    } else if value > max {
        max + (value - max) * leak
    } else {
        value
    }
}
