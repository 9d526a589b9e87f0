//! Geometry module - 2D points and curve interpolation
//!
//! This module provides:
//! - `Point2D` value type with vector arithmetic
//! - Spline helpers (Hermite, Catmull-Rom, cubic Bézier) used when
//!   smoothing and closing hand-drawn paths

mod point;
pub mod spline;

pub use point::{centroid, lerp, Point2D};
