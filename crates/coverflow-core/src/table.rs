//! Checkpoint table relating a card's offset from center to its visual style.
//!
//! The style function is sampled at a handful of offsets and linearly
//! interpolated in between. Outside the sampled span the nearest sample is
//! returned unchanged; there is no extrapolation.

use crate::error::CarouselError;

/// Visual style of one card. `x` is a percentage of the card width, `z` is in
/// pixels, `rotation_deg` is a Y-axis rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub x: f64,
    pub scale: f64,
    pub z: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

impl CardStyle {
    /// Componentwise `a*(1-t) + b*t`. Returns `self` exactly at `t == 0` and
    /// `other` exactly at `t == 1`.
    pub fn lerp(&self, other: &CardStyle, t: f64) -> CardStyle {
        CardStyle {
            x: lerp(self.x, other.x, t),
            scale: lerp(self.scale, other.scale, t),
            z: lerp(self.z, other.z, t),
            rotation_deg: lerp(self.rotation_deg, other.rotation_deg, t),
            opacity: lerp(self.opacity, other.opacity, t),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translateX({}%) scale({}) translateZ({}px) rotateY({}deg)",
            self.x, self.scale, self.z, self.rotation_deg
        )
    }
}

#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkpoint {
    pub offset: f64,
    pub style: CardStyle,
}

const fn checkpoint(
    offset: f64,
    x: f64,
    scale: f64,
    z: f64,
    rotation_deg: f64,
    opacity: f64,
) -> Checkpoint {
    Checkpoint {
        offset,
        style: CardStyle {
            x,
            scale,
            z,
            rotation_deg,
            opacity,
        },
    }
}

/// Symmetric five-sample coverflow table spanning offsets -2..=2.
pub const COVERFLOW_CHECKPOINTS: [Checkpoint; 5] = [
    checkpoint(-2.0, -280.0, 0.7, -100.0, 25.0, 0.4),
    checkpoint(-1.0, -160.0, 0.9, 0.0, 15.0, 0.7),
    checkpoint(0.0, 0.0, 1.2, 100.0, 0.0, 1.0),
    checkpoint(1.0, 160.0, 0.9, 0.0, -15.0, 0.7),
    checkpoint(2.0, 280.0, 0.7, -100.0, -25.0, 0.4),
];

#[derive(Clone, Debug)]
pub struct InterpolationTable {
    checkpoints: Vec<Checkpoint>,
}

impl Default for InterpolationTable {
    fn default() -> Self {
        Self::coverflow()
    }
}

impl InterpolationTable {
    pub fn coverflow() -> Self {
        Self {
            checkpoints: COVERFLOW_CHECKPOINTS.to_vec(),
        }
    }

    /// Build a table from custom samples. Offsets must be finite and strictly
    /// increasing so every segment has a nonzero width.
    pub fn new(checkpoints: Vec<Checkpoint>) -> Result<Self, CarouselError> {
        if checkpoints.len() < 2 {
            return Err(CarouselError::InvalidTable(format!(
                "need at least 2 checkpoints, got {}",
                checkpoints.len()
            )));
        }
        if let Some(bad) = checkpoints.iter().find(|c| !c.offset.is_finite()) {
            return Err(CarouselError::InvalidTable(format!(
                "non-finite offset {}",
                bad.offset
            )));
        }
        if let Some(pair) = checkpoints.windows(2).find(|w| w[0].offset >= w[1].offset) {
            return Err(CarouselError::InvalidTable(format!(
                "offsets not strictly increasing at {} -> {}",
                pair[0].offset, pair[1].offset
            )));
        }
        Ok(Self { checkpoints })
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Offset span covered by the samples, `(first, last)`.
    pub fn span(&self) -> (f64, f64) {
        (self.first().offset, self.last().offset)
    }

    pub fn style_at(&self, diff: f64) -> CardStyle {
        let first = self.first();
        let last = self.last();
        if diff.is_nan() || diff <= first.offset {
            return first.style;
        }
        if diff >= last.offset {
            return last.style;
        }
        // first.offset < diff < last.offset, so 1 <= upper <= len - 1
        let upper = self.checkpoints.partition_point(|c| c.offset <= diff);
        let p1 = &self.checkpoints[upper - 1];
        let p2 = &self.checkpoints[upper];
        let t = (diff - p1.offset) / (p2.offset - p1.offset);
        p1.style.lerp(&p2.style, t)
    }

    fn first(&self) -> &Checkpoint {
        &self.checkpoints[0]
    }

    fn last(&self) -> &Checkpoint {
        &self.checkpoints[self.checkpoints.len() - 1]
    }
}
