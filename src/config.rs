//! Per-session configuration
//!
//! All options are caller-mutable at any time. `FourierSession` decides
//! which changes need a new analysis and which only affect playback.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationEasing;
use crate::path::{ResampleOptions, MAX_CLOSING_POINTS};

/// Options recognised by the analysis pipeline and the animation driver
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierConfig {
    // Analysis
    /// Equidistant points produced by the resampler
    pub sample_count: usize,
    pub smoothing_passes: usize,
    pub close_loop: bool,
    /// End-to-start distance (input units) closed with a straight segment
    pub close_loop_threshold: f64,
    pub spline: bool,
    pub spline_oversampling: usize,
    /// Steps used for the precomputed reconstructed path
    pub path_steps: usize,

    // Playback
    /// Components shown in the epicycle chain
    pub frequencies_amount: usize,
    /// Time multiplier per tick (radians per second)
    pub animation_speed: f64,
    pub trail_length: usize,
    pub easing: AnimationEasing,
    /// Hint for renderers: don't draw the DC arm as a circle
    pub skip_dc: bool,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            sample_count: 1024,
            smoothing_passes: 6,
            close_loop: true,
            close_loop_threshold: 10.0,
            spline: true,
            spline_oversampling: 16,
            path_steps: 512,

            frequencies_amount: 50,
            animation_speed: 1.0,
            trail_length: 200,
            easing: AnimationEasing::Linear,
            skip_dc: true,
        }
    }
}

impl FourierConfig {
    /// Clamp out-of-range values into something the pipeline accepts
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();

        config.sample_count = config.sample_count.max(2);
        config.spline_oversampling = config.spline_oversampling.max(1);
        if !config.close_loop_threshold.is_finite() || config.close_loop_threshold < 0.0 {
            config.close_loop_threshold = defaults.close_loop_threshold;
        }
        if !config.animation_speed.is_finite() {
            config.animation_speed = defaults.animation_speed;
        }

        config
    }

    /// Resampler options derived from this configuration
    pub fn resample_options(&self) -> ResampleOptions {
        ResampleOptions {
            smoothing_passes: self.smoothing_passes,
            close_loop: self.close_loop,
            close_threshold: self.close_loop_threshold,
            max_closing_points: MAX_CLOSING_POINTS,
            spline: self.spline,
            oversampling: self.spline_oversampling,
        }
    }

    /// Whether switching from `self` to `other` invalidates the analysis
    pub fn needs_reanalysis(&self, other: &FourierConfig) -> bool {
        self.sample_count != other.sample_count || self.resample_options() != other.resample_options()
    }
}
