//! Closing an open stroke into a loop
//!
//! A stroke that ends close to where it started is closed with a straight
//! segment. Otherwise a short Hermite bridge is synthesized from the last
//! point back to the first, following the stroke's end and start
//! directions.

use crate::geometry::{spline, Point2D};

/// Upper bound on synthesized bridge points
pub const MAX_CLOSING_POINTS: usize = 8;

/// Close `points` into a loop that ends on its first point
///
/// # Arguments
/// * `points` - The open stroke
/// * `threshold` - End-to-start distance below which no bridge is needed
/// * `max_points` - Bridge points to insert (clamped to [`MAX_CLOSING_POINTS`])
///
/// Strokes with fewer than 3 points are returned unchanged.
pub fn close_loop(points: &[Point2D], threshold: f64, max_points: usize) -> Vec<Point2D> {
    let mut result = points.to_vec();
    if points.len() < 3 {
        return result;
    }

    let n = points.len();
    let first = points[0];
    let last = points[n - 1];

    if last.distance(first) < threshold {
        result.push(first);
        return result;
    }

    let start_tangent = (points[1] - points[0]).normalized();
    let end_tangent = (points[n - 1] - points[n - 2]).normalized();

    if let (Some(start_tangent), Some(end_tangent)) = (start_tangent, end_tangent) {
        let count = max_points.min(MAX_CLOSING_POINTS);
        for i in 1..=count {
            let t = i as f64 / (count + 1) as f64;
            result.push(spline::hermite(last, first, end_tangent, start_tangent, t));
        }
    }

    result.push(first);
    result
}
