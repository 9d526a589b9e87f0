//! Discrete Fourier transform of an equidistant point sequence
//!
//! Point `n` is read as the complex sample `z_n = x_n + i y_n`. With
//! `θ = -2π k n / N` every coefficient accumulates
//!
//! ```text
//! re += x_n cos θ + y_n sin θ
//! im += y_n cos θ - x_n sin θ
//! ```
//!
//! and is divided by `N`, i.e. `c_k = 1/N * Σ z_n * e^(+2πi k n / N)`,
//! for `k` in `-floor(N/2) .. N - floor(N/2)`. A counter-clockwise circle
//! therefore lands on `k = -1`, and evaluating the series at
//! `t = 2π m / N` yields sample `(N - m) mod N`: playback runs against
//! the drawing direction.
//!
//! The sum is evaluated directly; inputs are a few thousand samples at
//! most and the transform runs once per finished drawing.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use num_complex::Complex64;

use super::component::FourierComponent;
use crate::geometry::Point2D;

/// The frequency bins analysed for `n` samples, centred on zero
pub fn frequency_range(n: usize) -> std::ops::Range<i64> {
    let n = n as i64;
    let half = n / 2;
    -half..n - half
}

/// Compute one coefficient `c_k`
pub fn coefficient(points: &[Point2D], k: i64) -> Complex64 {
    let n = points.len();
    if n == 0 {
        return Complex64::new(0.0, 0.0);
    }

    let sum = points
        .iter()
        .enumerate()
        .fold(Complex64::new(0.0, 0.0), |acc, (i, p)| {
            // Reduce k*i modulo N first to keep the angle small.
            let turns = (k * i as i64).rem_euclid(n as i64);
            let theta = -TAU * turns as f64 / n as f64;
            let (sin, cos) = theta.sin_cos();
            acc + Complex64::new(p.x * cos + p.y * sin, p.y * cos - p.x * sin)
        });

    sum / n as f64
}

/// Analyse an equidistant path into its Fourier components
///
/// # Returns
/// One component per frequency bin (`points.len()` of them), sorted by
/// descending amplitude. Equal amplitudes are ordered by `|frequency|`
/// and then by frequency so the output is fully deterministic. Empty
/// input yields no components.
pub fn analyze(points: &[Point2D]) -> Vec<FourierComponent> {
    let mut components: Vec<FourierComponent> = frequency_range(points.len())
        .map(|k| FourierComponent::from_coefficient(k, coefficient(points, k)))
        .collect();

    components.sort_by(by_amplitude_desc);
    log::debug!("analyzed {} samples into {} components", points.len(), components.len());
    components
}

/// Re-order a component set by ascending frequency
pub fn sort_by_frequency(components: &mut [FourierComponent]) {
    components.sort_by_key(|c| c.frequency);
}

fn by_amplitude_desc(a: &FourierComponent, b: &FourierComponent) -> Ordering {
    b.amplitude
        .total_cmp(&a.amplitude)
        .then_with(|| a.frequency.abs().cmp(&b.frequency.abs()))
        .then_with(|| a.frequency.cmp(&b.frequency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circle(radius: f64, n: usize) -> Vec<Point2D> {
        (0..n)
            .map(|i| Point2D::from_polar(radius, i as f64 / n as f64 * TAU))
            .collect()
    }

    #[test]
    fn test_frequency_range() {
        assert_eq!(frequency_range(4), -2..2);
        assert_eq!(frequency_range(5), -2..3);
        assert_eq!(frequency_range(1), 0..1);
        assert_eq!(frequency_range(0), 0..0);
    }

    #[test]
    fn test_circle_has_single_component() {
        let n = 128;
        let components = analyze(&circle(25.0, n));
        assert_eq!(components.len(), n);

        let top = components[0];
        assert_eq!(top.frequency, -1);
        assert_abs_diff_eq!(top.amplitude, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top.phase, 0.0, epsilon = 1e-9);

        for c in &components[1..] {
            assert!(c.amplitude < 1e-9, "unexpected energy at k={}", c.frequency);
        }
    }

    #[test]
    fn test_dc_is_centroid() {
        let offset = Point2D::new(40.0, -12.0);
        let pts: Vec<Point2D> = circle(5.0, 64).into_iter().map(|p| p + offset).collect();
        let components = analyze(&pts);

        let dc = components.iter().find(|c| c.is_dc()).unwrap();
        let c = dc.coefficient();
        assert_abs_diff_eq!(c.re, offset.x, epsilon = 1e-9);
        assert_abs_diff_eq!(c.im, offset.y, epsilon = 1e-9);
    }

    #[test]
    fn test_sorted_by_amplitude() {
        let pts: Vec<Point2D> = (0..50)
            .map(|i| {
                let t = i as f64 / 50.0 * TAU;
                Point2D::from_polar(10.0, t) + Point2D::from_polar(3.0, -3.0 * t)
            })
            .collect();
        let components = analyze(&pts);

        for pair in components.windows(2) {
            assert!(pair[0].amplitude >= pair[1].amplitude);
        }
        assert_eq!(components[0].frequency, -1);
        assert_eq!(components[1].frequency, 3);
        assert_abs_diff_eq!(components[1].amplitude, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_amplitude_and_phase_bounds() {
        let pts: Vec<Point2D> = (0..37)
            .map(|i| Point2D::new((i * 7 % 11) as f64, (i * 3 % 5) as f64 - 2.0))
            .collect();
        for c in analyze(&pts) {
            assert!(c.amplitude >= 0.0);
            assert!(c.phase > -std::f64::consts::PI && c.phase <= std::f64::consts::PI);
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert!(analyze(&[]).is_empty());

        let one = analyze(&[Point2D::new(3.0, 4.0)]);
        assert_eq!(one.len(), 1);
        assert!(one[0].is_dc());
        assert_abs_diff_eq!(one[0].amplitude, 5.0);
    }

    #[test]
    fn test_matches_rotating_accumulation() {
        // Offset + counter-clockwise circle + third harmonic
        let n = 16;
        let pts: Vec<Point2D> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * TAU;
                Point2D::new(2.0, -1.0) + Point2D::from_polar(5.0, t) + Point2D::from_polar(1.5, 3.0 * t)
            })
            .collect();

        for k in frequency_range(n) {
            let (mut re, mut im) = (0.0, 0.0);
            for (i, p) in pts.iter().enumerate() {
                let theta = -TAU * k as f64 * i as f64 / n as f64;
                re += p.x * theta.cos() + p.y * theta.sin();
                im += p.y * theta.cos() - p.x * theta.sin();
            }
            let c = coefficient(&pts, k);
            assert_abs_diff_eq!(c.re, re / n as f64, epsilon = 1e-9);
            assert_abs_diff_eq!(c.im, im / n as f64, epsilon = 1e-9);
        }

        let c = |k| coefficient(&pts, k).norm();
        assert_abs_diff_eq!(c(-1), 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c(1), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c(-3), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_sort_by_frequency() {
        let mut components = analyze(&circle(1.0, 8));
        sort_by_frequency(&mut components);
        let freqs: Vec<i64> = components.iter().map(|c| c.frequency).collect();
        assert_eq!(freqs, vec![-4, -3, -2, -1, 0, 1, 2, 3]);
    }
}
