//! Runtime tuning for a carousel instance.
//!
//! Every field has a default from [`crate::constants`], so a host can pass
//! `{}` or a partial JSON object and override only what it needs.

use crate::constants::*;
use crate::error::CarouselError;
use serde::Deserialize;

/// Which navigation model drives the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Continuous progress: elastic drag, eased snap to the nearest card.
    #[default]
    Elastic,
    /// Integer index only: a swipe past the threshold moves one card.
    Swipe,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub policy: PolicyKind,
    pub damping: f64,
    pub snap_epsilon: f64,
    pub drag_sensitivity_px: f64,
    pub elastic_margin: f64,
    pub elastic_leak: f64,
    pub swipe_threshold_px: f64,
    pub click_slop_px: f64,
    pub cull_distance: f64,
    pub active_threshold: f64,
    pub click_tolerance: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            damping: DAMPING,
            snap_epsilon: SNAP_EPSILON,
            drag_sensitivity_px: DRAG_SENSITIVITY_PX,
            elastic_margin: ELASTIC_MARGIN,
            elastic_leak: ELASTIC_LEAK,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            click_slop_px: CLICK_SLOP_PX,
            cull_distance: CULL_DISTANCE,
            active_threshold: ACTIVE_THRESHOLD,
            click_tolerance: CLICK_TOLERANCE,
        }
    }
}

impl CarouselConfig {
    pub fn with_policy(policy: PolicyKind) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config object.
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        let config: CarouselConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(invalid("damping", "must be in (0, 1]"));
        }
        if !(self.snap_epsilon > 0.0) {
            return Err(invalid("snap_epsilon", "must be positive"));
        }
        if !(self.drag_sensitivity_px > 0.0) {
            return Err(invalid("drag_sensitivity_px", "must be positive"));
        }
        if !(self.elastic_margin >= 0.0) {
            return Err(invalid("elastic_margin", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.elastic_leak) {
            return Err(invalid("elastic_leak", "must be in [0, 1]"));
        }
        if !(self.swipe_threshold_px > 0.0) {
            return Err(invalid("swipe_threshold_px", "must be positive"));
        }
        if !(self.click_slop_px >= 0.0) {
            return Err(invalid("click_slop_px", "must not be negative"));
        }
        if !(self.cull_distance > 0.0) {
            return Err(invalid("cull_distance", "must be positive"));
        }
        if !(self.active_threshold >= 0.0) {
            return Err(invalid("active_threshold", "must not be negative"));
        }
        if !(self.click_tolerance >= 0.0) {
            return Err(invalid("click_tolerance", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> CarouselError {
    CarouselError::InvalidConfig { field, reason }
}
