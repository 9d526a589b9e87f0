//! AnimationDriver - advances time and replays the epicycles
//!
//! The driver has no timer of its own. Whoever owns the render loop calls
//! [`AnimationDriver::tick`] once per frame with the elapsed time.

use std::sync::Arc;

use super::easing::AnimationEasing;
use super::trail::Trail;
use crate::fourier::FourierComponent;
use crate::reconstruct::{reconstruct_frame, AnimationFrame};

/// Whether the driver has anything to animate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// No components; ticks are no-ops and frames are empty
    Idle,
    /// Components present; every tick advances time
    Animating,
}

/// Replays a component set over time and records the tip trail
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    components: Arc<[FourierComponent]>,
    /// Accumulated time in radians; never wrapped
    time: f64,
    /// Time multiplier applied to every tick delta
    speed: f64,
    /// Components included in the chain
    limit: usize,
    easing: AnimationEasing,
    trail: Trail,
    frame: AnimationFrame,
}

impl AnimationDriver {
    /// Create an idle driver
    ///
    /// # Arguments
    /// * `limit` - Number of components to show in the chain
    /// * `speed` - Time multiplier per tick
    /// * `trail_length` - Trail capacity
    pub fn new(limit: usize, speed: f64, trail_length: usize) -> Self {
        Self {
            components: Arc::from(Vec::<FourierComponent>::new()),
            time: 0.0,
            speed,
            limit,
            easing: AnimationEasing::Linear,
            trail: Trail::new(trail_length),
            frame: AnimationFrame::empty(),
        }
    }

    pub fn state(&self) -> AnimationState {
        if self.components.is_empty() {
            AnimationState::Idle
        } else {
            AnimationState::Animating
        }
    }

    /// Replace the component set
    ///
    /// Time and trail restart from zero. A non-empty set starts the
    /// animation; an empty one returns the driver to idle.
    pub fn set_components(&mut self, components: impl Into<Arc<[FourierComponent]>>) {
        self.components = components.into();
        self.time = 0.0;
        self.trail.clear();
        self.frame = self.evaluate();
        log::debug!(
            "driver loaded {} components ({:?})",
            self.components.len(),
            self.state()
        );
    }

    /// Drop the components and return to idle
    pub fn clear(&mut self) {
        self.set_components(Vec::<FourierComponent>::new());
    }

    /// Advance the animation by `delta` seconds
    ///
    /// In the animating state the time moves forward by `delta * speed`,
    /// the new frame is computed and its tip is pushed onto the trail.
    /// Idle ticks change nothing and return an empty frame.
    pub fn tick(&mut self, delta: f64) -> &AnimationFrame {
        if self.state() == AnimationState::Idle {
            return &self.frame;
        }

        self.time += delta * self.speed;
        self.frame = self.evaluate();
        if let Some(tip) = self.frame.tip() {
            self.trail.push(tip);
        }
        &self.frame
    }

    fn evaluate(&self) -> AnimationFrame {
        if self.components.is_empty() {
            return AnimationFrame::empty();
        }
        reconstruct_frame(&self.components, self.easing.ease_time(self.time), self.limit)
    }

    pub fn components(&self) -> &[FourierComponent] {
        &self.components
    }

    pub fn frame(&self) -> &AnimationFrame {
        &self.frame
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change how many components the chain shows
    ///
    /// The current frame is rebuilt immediately; time does not move.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.frame = self.evaluate();
    }

    pub fn easing(&self) -> AnimationEasing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: AnimationEasing) {
        self.easing = easing;
        self.frame = self.evaluate();
    }

    pub fn set_trail_length(&mut self, length: usize) {
        self.trail.set_capacity(length);
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(50, 1.0, 200)
    }
}
