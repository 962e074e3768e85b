/// Host identifier of one pointer (a mouse, pen or a single finger).
pub type PointerId = i32;

/// Normalized input delivered by the host. Mouse and touch both arrive as
/// pointer events carrying the pointer's id and a horizontal client
/// coordinate in CSS pixels. Only the pointer that started a drag moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { id: PointerId, x: f64 },
    PointerMove { id: PointerId, x: f64 },
    PointerUp { id: PointerId, x: f64 },
    CardClick(usize),
    DotClick(usize),
    Key(NavKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::Previous),
            "ArrowRight" => Some(NavKey::Next),
            _ => None,
        }
    }

    #[inline]
    pub fn step(self) -> f64 {
        match self {
            NavKey::Previous => -1.0,
            NavKey::Next => 1.0,
        }
    }
}
