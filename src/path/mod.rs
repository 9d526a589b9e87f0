//! Path module - turning raw pointer strokes into equidistant samples
//!
//! The resampling pipeline runs in this order:
//! 1. `smooth` - moving-average passes to suppress pointer jitter
//! 2. `close_loop` - bridge the stroke back to its start
//! 3. `closed_spline` - refine the loop into a dense smooth curve
//! 4. `Polyline::equidistant` - place N points at equal arc length
//!
//! Every stage is a pure function of its inputs.

mod closure;
mod polyline;
mod refine;
mod smooth;

pub use closure::{close_loop, MAX_CLOSING_POINTS};
pub use polyline::{cumulative_lengths, resample_equidistant, Polyline};
pub use refine::closed_spline;
pub use smooth::smooth;

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// Options controlling the resampling pipeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleOptions {
    /// Number of smoothing passes (0 disables smoothing)
    pub smoothing_passes: usize,
    /// Whether to close the stroke into a loop
    pub close_loop: bool,
    /// End-to-start distance below which the loop is closed directly
    pub close_threshold: f64,
    /// Bridge points synthesized when the gap is wider than the threshold
    pub max_closing_points: usize,
    /// Refine the closed loop with a spline before resampling
    pub spline: bool,
    /// Spline points generated per loop segment
    pub oversampling: usize,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            smoothing_passes: 6,
            close_loop: true,
            close_threshold: 10.0,
            max_closing_points: MAX_CLOSING_POINTS,
            spline: true,
            oversampling: 16,
        }
    }
}

impl ResampleOptions {
    /// Options that only resample, leaving the stroke geometry untouched
    pub fn raw() -> Self {
        Self {
            smoothing_passes: 0,
            close_loop: false,
            spline: false,
            ..Self::default()
        }
    }
}

/// Resample a raw stroke into `target_count` arc-length equidistant points
///
/// # Arguments
/// * `path` - Raw pointer samples in drawing order
/// * `target_count` - Number of output points (values below 2 are raised to 2)
/// * `options` - Smoothing, closure and spline settings
///
/// # Returns
/// Exactly `target_count` points, except when `path` has fewer than 2
/// points, in which case it is returned unchanged. A stroke with zero
/// total length yields `target_count` copies of its point.
pub fn resample(path: &[Point2D], target_count: usize, options: &ResampleOptions) -> Vec<Point2D> {
    if path.len() < 2 {
        return path.to_vec();
    }
    let target_count = target_count.max(2);

    let mut dense = if options.smoothing_passes > 0 {
        smooth(path, options.smoothing_passes)
    } else {
        path.to_vec()
    };

    if options.close_loop {
        dense = close_loop(&dense, options.close_threshold, options.max_closing_points);
        if options.spline {
            dense = closed_spline(&dense, options.oversampling);
        }
    }

    let polyline = Polyline::new(dense);
    log::debug!(
        "resampling {} raw points ({} dense, length {:.1}) to {}",
        path.len(),
        polyline.len(),
        polyline.length(),
        target_count
    );
    polyline.equidistant(target_count)
}
