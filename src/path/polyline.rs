//! Polyline - a point sequence with cached arc lengths
//!
//! Used as the dense intermediate curve that equidistant samples are
//! taken from.

use crate::geometry::{lerp, Point2D};

/// A polyline with its cumulative arc-length table
///
/// `cumulative[i]` is the distance along the polyline from the first
/// point to `points[i]`, so `cumulative[0] == 0.0` and the last entry is
/// the total length.
#[derive(Clone, Debug)]
pub struct Polyline {
    points: Vec<Point2D>,
    cumulative: Vec<f64>,
}

impl Polyline {
    pub fn new(points: Vec<Point2D>) -> Self {
        let cumulative = cumulative_lengths(&points);
        Self { points, cumulative }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Total length along the polyline
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Place `count` points at equal arc-length intervals
    ///
    /// The first output point is the first polyline point and the last is
    /// the last polyline point; in between, points are linearly
    /// interpolated inside the bracketing segment.
    ///
    /// Degenerate inputs never divide by zero:
    /// - empty polyline → empty output
    /// - zero total length → `count` copies of the first point
    pub fn equidistant(&self, count: usize) -> Vec<Point2D> {
        let Some(&first) = self.points.first() else {
            return Vec::new();
        };
        if count == 0 {
            return Vec::new();
        }

        let total = self.length();
        if count == 1 || self.points.len() == 1 || total == 0.0 {
            return vec![first; count];
        }

        let step = total / (count - 1) as f64;
        let last_index = self.points.len() - 1;
        let mut out = Vec::with_capacity(count);
        out.push(first);

        // Targets increase monotonically, so the bracketing segment only
        // ever moves forward.
        let mut j = 1;
        for i in 1..count - 1 {
            let target = i as f64 * step;
            while j < last_index && self.cumulative[j] < target {
                j += 1;
            }

            let start = self.cumulative[j - 1];
            let seg_len = self.cumulative[j] - start;
            let ratio = if seg_len > 0.0 {
                ((target - start) / seg_len).clamp(0.0, 1.0)
            } else {
                0.0
            };
            out.push(lerp(self.points[j - 1], self.points[j], ratio));
        }

        out.push(self.points[last_index]);
        out
    }
}

/// Cumulative distance table for a point sequence
///
/// The result has the same length as `points`, starting at `0.0`.
pub fn cumulative_lengths(points: &[Point2D]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut total = 0.0;

    if !points.is_empty() {
        cumulative.push(0.0);
    }
    for pair in points.windows(2) {
        total += pair[0].distance(pair[1]);
        cumulative.push(total);
    }

    cumulative
}

/// Resample a polyline to `count` equidistant points
pub fn resample_equidistant(points: &[Point2D], count: usize) -> Vec<Point2D> {
    Polyline::new(points.to_vec()).equidistant(count)
}
