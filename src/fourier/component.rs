//! FourierComponent - one rotating vector of the series

use std::f64::consts::{PI, TAU};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// A single frequency term `amplitude * e^(i * (frequency * t + phase))`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourierComponent {
    /// Signed integer frequency, 0 is the DC term
    pub frequency: i64,
    /// Vector length, always >= 0
    pub amplitude: f64,
    /// Starting angle in (-π, π]
    pub phase: f64,
}

impl FourierComponent {
    /// Build a component from a complex coefficient
    pub fn from_coefficient(frequency: i64, c: Complex64) -> Self {
        Self {
            frequency,
            amplitude: c.re.hypot(c.im),
            phase: normalize_phase(c.im.atan2(c.re)),
        }
    }

    /// The zero-frequency (centroid) term
    pub fn is_dc(&self) -> bool {
        self.frequency == 0
    }

    pub fn power(&self) -> f64 {
        self.amplitude * self.amplitude
    }

    pub fn coefficient(&self) -> Complex64 {
        Complex64::from_polar(self.amplitude, self.phase)
    }

    /// Rotation angle of this vector at time `t`
    pub fn angle_at(&self, t: f64) -> f64 {
        self.frequency as f64 * t + self.phase
    }

    /// The vector itself at time `t`
    pub fn at(&self, t: f64) -> Point2D {
        Point2D::from_polar(self.amplitude, self.angle_at(t))
    }
}

/// Fold an `atan2` result into (-π, π]
///
/// `atan2` can return exactly `-π` (for a negative real part with a
/// negative-zero imaginary part); that value maps to `π`.
pub fn normalize_phase(phase: f64) -> f64 {
    if phase <= -PI {
        phase + TAU
    } else {
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_coefficient() {
        let c = FourierComponent::from_coefficient(3, Complex64::new(0.0, 2.0));
        assert_eq!(c.frequency, 3);
        assert_abs_diff_eq!(c.amplitude, 2.0);
        assert_abs_diff_eq!(c.phase, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(c.power(), 4.0);
        assert!(!c.is_dc());
    }

    #[test]
    fn test_negative_pi_phase_is_folded() {
        let c = FourierComponent::from_coefficient(0, Complex64::new(-1.0, -0.0));
        assert_abs_diff_eq!(c.phase, PI);
        assert!(c.is_dc());
    }

    #[test]
    fn test_vector_at_time() {
        let c = FourierComponent {
            frequency: 2,
            amplitude: 1.0,
            phase: 0.0,
        };
        let p = c.at(std::f64::consts::FRAC_PI_4);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);

        let back = c.coefficient();
        assert_abs_diff_eq!(back.re, 1.0);
        assert_abs_diff_eq!(back.im, 0.0);
    }
}
