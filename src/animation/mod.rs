//! Animation module - time-driven playback of the epicycle chain
//!
//! This module provides:
//! - `AnimationDriver` with its idle/animating state
//! - `Trail` bounded history of tip positions
//! - `AnimationEasing` curves applied inside each period

mod driver;
mod easing;
mod trail;

pub use driver::{AnimationDriver, AnimationState};
pub use easing::AnimationEasing;
pub use trail::Trail;
