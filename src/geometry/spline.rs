//! Cubic interpolation helpers
//!
//! All functions take a local parameter `t` in [0, 1] for the segment
//! being evaluated.

use super::Point2D;

/// Cubic Hermite interpolation between `p0` and `p1`
///
/// `m0` and `m1` are the tangents at the start and end of the segment.
pub fn hermite(p0: Point2D, p1: Point2D, m0: Point2D, m1: Point2D, t: f64) -> Point2D {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h10 = t3 - 2.0 * t2 + t;
    let h11 = t3 - t2;

    p0 * h00 + p1 * h01 + m0 * h10 + m1 * h11
}

/// Uniform Catmull-Rom spline through `p1` and `p2`
///
/// `p0` and `p3` are the neighbours that shape the tangents.
pub fn catmull_rom(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = -0.5 * t3 + t2 - 0.5 * t;
    let c1 = 1.5 * t3 - 2.5 * t2 + 1.0;
    let c2 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
    let c3 = 0.5 * t3 - 0.5 * t2;

    p0 * c0 + p1 * c1 + p2 * c2 + p3 * c3
}

/// Cubic Bézier curve with endpoints `p0`, `p3` and controls `c1`, `c2`
pub fn cubic_bezier(p0: Point2D, c1: Point2D, c2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * t * u * u;
    let b2 = 3.0 * t * t * u;
    let b3 = t * t * t;

    p0 * b0 + c1 * b1 + c2 * b2 + p3 * b3
}
