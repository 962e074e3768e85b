//! Platform-free core of the coverflow carousel: checkpoint interpolation,
//! progress easing, input mapping and per-card projection. The web frontend
//! supplies the render sink, frame scheduler and input source.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod policy;
pub mod ports;
pub mod progress;
pub mod projector;
pub mod runtime;
pub mod table;

pub use carousel::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use input::*;
pub use policy::{swipe_step, ElasticEasing, Effect, NavigationPolicy, SwipeStep};
pub use ports::*;
pub use progress::*;
pub use projector::*;
pub use runtime::*;
pub use table::*;
