//! Reconstruction - replaying Fourier components as epicycles
//!
//! A frame is the chain of partial sums at one time `t`; the path is the
//! chain's tip traced over one full period. Both are pure functions of
//! the component list.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::fourier::FourierComponent;
use crate::geometry::Point2D;

/// One link of the epicycle chain
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpicycleArm {
    /// Partial sum up to and including this component
    pub position: Point2D,
    /// Angle of this component's vector at the frame time
    pub angle: f64,
    /// Radius of the circle this arm traces
    pub amplitude: f64,
    /// Frequency of the component (renderers skip the DC arm)
    pub frequency: i64,
}

impl EpicycleArm {
    /// Where this arm is attached: the previous partial sum
    pub fn center(&self) -> Point2D {
        self.position - Point2D::from_polar(self.amplitude, self.angle)
    }
}

/// The epicycle chain at a single point in time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    arms: Vec<EpicycleArm>,
}

impl AnimationFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn arms(&self) -> &[EpicycleArm] {
        &self.arms
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EpicycleArm> {
        self.arms.iter()
    }

    /// Final position of the chain, `None` for an empty frame
    pub fn tip(&self) -> Option<Point2D> {
        self.arms.last().map(|arm| arm.position)
    }
}

impl<'a> IntoIterator for &'a AnimationFrame {
    type Item = &'a EpicycleArm;
    type IntoIter = std::slice::Iter<'a, EpicycleArm>;

    fn into_iter(self) -> Self::IntoIter {
        self.arms.iter()
    }
}

/// Build the epicycle chain for time `t`
///
/// # Arguments
/// * `components` - Component list, in the order the chain should be built
/// * `t` - Time in radians; one period is `2π`
/// * `limit` - Number of leading components to include (clamped to the list length)
///
/// The chain starts at the origin. When the DC component is included it
/// supplies the offset to the curve's centroid.
pub fn reconstruct_frame(components: &[FourierComponent], t: f64, limit: usize) -> AnimationFrame {
    let mut position = Point2D::ZERO;
    let arms = components
        .iter()
        .take(limit)
        .map(|c| {
            let angle = c.angle_at(t);
            position += Point2D::from_polar(c.amplitude, angle);
            EpicycleArm {
                position,
                angle,
                amplitude: c.amplitude,
                frequency: c.frequency,
            }
        })
        .collect();

    AnimationFrame { arms }
}

/// Sum of all components at time `t`, without building the chain
pub fn reconstruct_point(components: &[FourierComponent], t: f64) -> Point2D {
    components
        .iter()
        .fold(Point2D::ZERO, |acc, c| acc + c.at(t))
}

/// Trace the full reconstructed curve over one period
///
/// Evaluates every component at `step_count` evenly spaced times
/// `t = i / step_count * 2π` and appends the first point again, so the
/// result has `step_count + 1` points and is visibly closed. Empty when
/// there are no components or no steps.
pub fn reconstruct_path(components: &[FourierComponent], step_count: usize) -> Vec<Point2D> {
    if components.is_empty() || step_count == 0 {
        return Vec::new();
    }

    let mut path: Vec<Point2D> = (0..step_count)
        .map(|i| {
            let t = i as f64 / step_count as f64 * TAU;
            reconstruct_frame(components, t, components.len())
                .tip()
                .unwrap_or(Point2D::ZERO)
        })
        .collect();

    path.push(path[0]);
    path
}
