//! Moving-average smoothing for pointer input
//!
//! Each pass replaces every interior point with
//! `0.25 * prev + 0.5 * self + 0.25 * next`. Endpoints never move.

use crate::geometry::Point2D;

/// Weight given to each neighbour; the point itself keeps `1 - 2w`
const NEIGHBOUR_WEIGHT: f64 = 0.25;

/// Apply `passes` rounds of 3-point weighted smoothing
///
/// Paths with fewer than 3 points have no interior and are returned
/// unchanged.
pub fn smooth(points: &[Point2D], passes: usize) -> Vec<Point2D> {
    let mut current = points.to_vec();
    if current.len() < 3 {
        return current;
    }

    let mut next = current.clone();
    for _ in 0..passes {
        for i in 1..current.len() - 1 {
            next[i] = current[i] * (1.0 - 2.0 * NEIGHBOUR_WEIGHT)
                + (current[i - 1] + current[i + 1]) * NEIGHBOUR_WEIGHT;
        }
        std::mem::swap(&mut current, &mut next);
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_weights() {
        let pts = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 8.0),
            Point2D::new(8.0, 0.0),
        ];
        let out = smooth(&pts, 1);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[1], Point2D::new(4.0, 4.0));
        assert_eq!(out[2], pts[2]);
    }

    #[test]
    fn test_endpoints_untouched_after_many_passes() {
        let pts: Vec<Point2D> = (0..10)
            .map(|i| Point2D::new(i as f64, if i % 2 == 0 { 1.0 } else { -1.0 }))
            .collect();
        let out = smooth(&pts, 6);
        assert_eq!(out.len(), pts.len());
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[9], pts[9]);
        // Zig-zag amplitude must shrink
        assert!(out[4].y.abs() < 0.5);
    }

    #[test]
    fn test_short_paths_and_zero_passes() {
        let two = [Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)];
        assert_eq!(smooth(&two, 3), two.to_vec());

        let three = [
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 5.0),
            Point2D::new(2.0, 0.0),
        ];
        assert_eq!(smooth(&three, 0), three.to_vec());
    }
}
