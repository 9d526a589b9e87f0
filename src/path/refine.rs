//! Spline refinement of a closed loop
//!
//! Every segment of the loop is replaced by `oversampling` points on a
//! cubic Bézier whose control points follow the chord tangents at both
//! ends. A segment whose tangents vanish falls back to Catmull-Rom.

use crate::geometry::{spline, Point2D};

/// Control points sit a quarter of the neighbouring chord away
const CONTROL_SCALE: f64 = 0.25;

/// Refine a closed loop into a dense smooth curve
///
/// `points` may end with a copy of its first point (as produced by
/// [`close_loop`](super::close_loop)); the duplicate is dropped before
/// the loop is treated cyclically. The result ends on its first point
/// again.
///
/// Loops with fewer than 3 distinct points are returned unchanged.
pub fn closed_spline(points: &[Point2D], oversampling: usize) -> Vec<Point2D> {
    let ring = match points.split_last() {
        Some((last, rest)) if !rest.is_empty() && *last == points[0] => rest,
        _ => points,
    };
    let distinct = 1 + ring.windows(2).filter(|w| w[0] != w[1]).count();
    if distinct < 3 {
        return points.to_vec();
    }

    let n = ring.len();
    let segments = oversampling.max(1);
    let mut out = Vec::with_capacity(n * segments + 1);

    for i in 0..n {
        let p0 = ring[(i + n - 1) % n];
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];
        let p3 = ring[(i + 2) % n];

        let tangent1 = p2 - p0;
        let tangent2 = p3 - p1;
        let degenerate = tangent1.normalized().is_none() || tangent2.normalized().is_none();

        let c1 = p1 + tangent1 * CONTROL_SCALE;
        let c2 = p2 - tangent2 * CONTROL_SCALE;

        for j in 0..segments {
            let t = j as f64 / segments as f64;
            let p = if degenerate {
                spline::catmull_rom(p0, p1, p2, p3, t)
            } else {
                spline::cubic_bezier(p1, c1, c2, p2, t)
            };
            out.push(p);
        }
    }

    out.push(ring[0]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
            Point2D::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_output_size_and_closure() {
        let out = closed_spline(&square(), 16);
        assert_eq!(out.len(), 4 * 16 + 1);
        assert_eq!(out[0], Point2D::new(0.0, 0.0));
        assert_eq!(*out.last().unwrap(), Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_passes_through_input_vertices() {
        let out = closed_spline(&square(), 8);
        for (k, corner) in square()[..4].iter().enumerate() {
            let p = out[k * 8];
            assert_abs_diff_eq!(p.x, corner.x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, corner.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_curve_stays_near_square() {
        let out = closed_spline(&square(), 32);
        for p in out {
            assert!(p.x > -3.0 && p.x < 13.0);
            assert!(p.y > -3.0 && p.y < 13.0);
        }
    }

    #[test]
    fn test_degenerate_loop_unchanged() {
        let pts = vec![Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0), Point2D::new(1.0, 1.0)];
        assert_eq!(closed_spline(&pts, 16), pts);
    }
}
