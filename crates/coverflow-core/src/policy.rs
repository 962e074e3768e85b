//! Navigation policies: how drags, jumps and frames move [`ProgressState`].

use crate::config::{CarouselConfig, PolicyKind};
use crate::progress::{drag_progress, round_half_up, rubber_band, ProgressState};

/// What the host has to do after the state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing; a running frame loop picks the change up.
    None,
    /// Render once now.
    Redraw,
    /// Start a frame loop that lasts until [`Effect::EndFrames`].
    BeginFrames,
    /// Cancel the loop started by [`Effect::BeginFrames`] and render once.
    EndFrames,
}

pub trait NavigationPolicy {
    /// Whether the host keeps a frame loop running for the component lifetime.
    fn runs_continuously(&self) -> bool;

    fn begin_drag(&self, state: &mut ProgressState, x: f64) -> Effect;

    fn drag(&self, state: &mut ProgressState, x: f64, count: usize) -> Effect;

    fn end_drag(&self, state: &mut ProgressState, x: f64, count: usize) -> Effect;

    /// Navigate to `index` (already validated against `count`).
    fn jump(&self, state: &mut ProgressState, index: f64, count: usize) -> Effect;

    /// Per-frame update.
    fn advance(&self, state: &mut ProgressState) -> bool;
}

pub fn build(config: &CarouselConfig) -> Box<dyn NavigationPolicy> {
    match config.policy {
        PolicyKind::Elastic => Box::new(ElasticEasing::from_config(config)),
        PolicyKind::Swipe => Box::new(SwipeStep::from_config(config)),
    }
}

/// Continuous progress. Drags move `current` directly with rubber-banding
/// past the ends; releasing (or any jump) sets `target` and the per-frame
/// easing carries `current` there.
#[derive(Clone, Copy, Debug)]
pub struct ElasticEasing {
    pub damping: f64,
    pub snap_epsilon: f64,
    pub sensitivity_px: f64,
    pub margin: f64,
    pub leak: f64,
}

impl ElasticEasing {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            damping: config.damping,
            snap_epsilon: config.snap_epsilon,
            sensitivity_px: config.drag_sensitivity_px,
            margin: config.elastic_margin,
            leak: config.elastic_leak,
        }
    }

    /// Elastic bounds for `count` items.
    pub fn bounds(&self, count: usize) -> (f64, f64) {
        let last = count.saturating_sub(1) as f64;
        (-self.margin, last + self.margin)
    }
}

impl NavigationPolicy for ElasticEasing {
    fn runs_continuously(&self) -> bool {
        true
    }

    fn begin_drag(&self, state: &mut ProgressState, x: f64) -> Effect {
        state.begin_drag(x);
        Effect::None
    }

    fn drag(&self, state: &mut ProgressState, x: f64, count: usize) -> Effect {
        state.track_pointer(x);
        let raw = drag_progress(
            state.drag_origin_progress,
            state.drag_origin_x,
            x,
            self.sensitivity_px,
        );
        let (min, max) = self.bounds(count);
        state.current = rubber_band(raw, min, max, self.leak);
        Effect::None
    }

    fn end_drag(&self, state: &mut ProgressState, x: f64, count: usize) -> Effect {
        state.track_pointer(x);
        state.end_drag();
        state.set_target(round_half_up(state.current), count);
        log::debug!(
            "[carousel] drag released at {:.3}, snapping to {}",
            state.current,
            state.target
        );
        Effect::None
    }

    fn jump(&self, state: &mut ProgressState, index: f64, count: usize) -> Effect {
        state.set_target(index, count);
        Effect::None
    }

    fn advance(&self, state: &mut ProgressState) -> bool {
        state.ease(self.damping, self.snap_epsilon)
    }
}

/// Integer index only. A drag is judged once, on release, by its net
/// displacement; past the threshold it moves exactly one card.
#[derive(Clone, Copy, Debug)]
pub struct SwipeStep {
    pub threshold_px: f64,
}

impl SwipeStep {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            threshold_px: config.swipe_threshold_px,
        }
    }
}

/// Index change for a swipe of `delta_px`: left past the threshold is `+1`,
/// right past it is `-1`, anything shorter is `0`.
#[inline]
pub fn swipe_step(delta_px: f64, threshold_px: f64) -> i32 {
    if delta_px < -threshold_px {
        1
    } else if delta_px > threshold_px {
        -1
    } else {
        0
    }
}

impl NavigationPolicy for SwipeStep {
    fn runs_continuously(&self) -> bool {
        false
    }

    fn begin_drag(&self, state: &mut ProgressState, x: f64) -> Effect {
        state.begin_drag(x);
        Effect::BeginFrames
    }

    fn drag(&self, state: &mut ProgressState, x: f64, _count: usize) -> Effect {
        state.track_pointer(x);
        Effect::None
    }

    fn end_drag(&self, state: &mut ProgressState, x: f64, count: usize) -> Effect {
        let delta = state.track_pointer(x);
        state.end_drag();
        let step = swipe_step(delta, self.threshold_px);
        if step != 0 {
            state.snap_to(state.target + f64::from(step), count);
            log::debug!("[carousel] swipe {:+.0}px -> index {}", delta, state.target);
        }
        Effect::EndFrames
    }

    fn jump(&self, state: &mut ProgressState, index: f64, count: usize) -> Effect {
        state.snap_to(index, count);
        Effect::Redraw
    }

    fn advance(&self, state: &mut ProgressState) -> bool {
        if state.current != state.target {
            state.current = state.target;
            return true;
        }
        false
    }
}
