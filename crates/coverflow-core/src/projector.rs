//! Per-card visual output derived from the current progress.

use crate::config::CarouselConfig;
use crate::constants::{STACKING_BASE, STACKING_FALLOFF};
use crate::progress::{clamp_index, round_half_up};
use crate::table::{CardStyle, InterpolationTable};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    pub style: CardStyle,
    /// Stacking order; the card nearest the center is highest.
    pub stacking: i32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardCommand {
    Hidden,
    Visible(CardVisual),
}

impl CardCommand {
    pub fn is_visible(&self) -> bool {
        matches!(self, CardCommand::Visible(_))
    }

    pub fn visual(&self) -> Option<&CardVisual> {
        match self {
            CardCommand::Visible(v) => Some(v),
            CardCommand::Hidden => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub cull_distance: f64,
    pub active_threshold: f64,
}

impl Projector {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            cull_distance: config.cull_distance,
            active_threshold: config.active_threshold,
        }
    }

    pub fn card(&self, table: &InterpolationTable, index: usize, progress: f64) -> CardCommand {
        let diff = index as f64 - progress;
        let distance = diff.abs();
        if distance > self.cull_distance {
            return CardCommand::Hidden;
        }
        CardCommand::Visible(CardVisual {
            style: table.style_at(diff),
            stacking: stacking_order(distance),
            active: distance < self.active_threshold,
        })
    }

    /// Index of the item whose caption and indicator are shown.
    pub fn active_index(&self, progress: f64, count: usize) -> usize {
        round_half_up(clamp_index(progress, count)) as usize
    }
}

#[inline]
pub fn stacking_order(distance: f64) -> i32 {
    round_half_up(STACKING_BASE - distance * STACKING_FALLOFF) as i32
}
