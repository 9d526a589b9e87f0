//! Easing curves applied within each animation period
//!
//! The driver maps the fractional position inside the current period
//! through one of these curves before evaluating the epicycles. Every
//! curve maps 0 to 0 and 1 to 1, so the chain stays continuous across
//! period boundaries.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Easing curve shapes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationEasing {
    /// Constant angular speed
    #[default]
    Linear,
    /// Quadratic ease in, ease out
    EaseInOut,
    /// Decaying bounce towards the end of the period
    Bounce,
}

impl AnimationEasing {
    /// Get all easing types
    pub fn all() -> &'static [AnimationEasing] {
        &[
            AnimationEasing::Linear,
            AnimationEasing::EaseInOut,
            AnimationEasing::Bounce,
        ]
    }

    /// Get the name of this easing
    pub fn name(&self) -> &'static str {
        match self {
            AnimationEasing::Linear => "Linear",
            AnimationEasing::EaseInOut => "Ease in/out",
            AnimationEasing::Bounce => "Bounce",
        }
    }

    /// Ease a progress value in [0, 1]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            AnimationEasing::Linear => value,

            AnimationEasing::EaseInOut => {
                if value < 0.5 {
                    2.0 * value * value
                } else {
                    1.0 - (-2.0 * value + 2.0).powi(2) / 2.0
                }
            }

            AnimationEasing::Bounce => {
                const N: f64 = 7.5625;
                const D: f64 = 2.75;
                if value < 1.0 / D {
                    N * value * value
                } else if value < 2.0 / D {
                    let v = value - 1.5 / D;
                    N * v * v + 0.75
                } else if value < 2.5 / D {
                    let v = value - 2.25 / D;
                    N * v * v + 0.9375
                } else {
                    let v = value - 2.625 / D;
                    N * v * v + 0.984375
                }
            }
        }
    }

    /// Map unbounded animation time (radians) to eased time
    ///
    /// Whole periods pass through unchanged; only the position inside the
    /// current period is eased.
    pub fn ease_time(&self, time: f64) -> f64 {
        if *self == AnimationEasing::Linear {
            return time;
        }
        let periods = time / TAU;
        let whole = periods.floor();
        TAU * (whole + self.apply(periods - whole))
    }
}
