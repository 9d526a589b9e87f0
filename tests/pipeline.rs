//! End-to-end checks: raw stroke → resample → analyze → reconstruct → animate

use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;
use epicycles::geometry::centroid;
use epicycles::{
    analyze, reconstruct_frame, reconstruct_path, resample, AnimationDriver, AnimationState,
    FourierConfig, FourierSession, Point2D, ResampleOptions,
};

fn square_corners() -> Vec<Point2D> {
    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, 0.0),
        Point2D::new(10.0, 10.0),
        Point2D::new(0.0, 10.0),
    ]
}

/// Distance from `p` to the boundary of the 10x10 square at the origin
fn distance_to_square(p: Point2D) -> f64 {
    let corners = square_corners();
    (0..4)
        .map(|i| {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let ab = b - a;
            let t = ((p - a).dot(ab) / ab.dot(ab)).clamp(0.0, 1.0);
            p.distance(a + ab * t)
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn square_round_trip() {
    // Smoothing keeps the endpoints fixed, so a handful of passes over a
    // four-corner stroke pulls it into a sliver. Resample the raw corners.
    let options = ResampleOptions {
        smoothing_passes: 0,
        spline: false,
        ..ResampleOptions::default()
    };
    let samples = resample(&square_corners(), 64, &options);
    assert_eq!(samples.len(), 64);

    let components = analyze(&samples);
    let path = reconstruct_path(&components, 64);
    assert_eq!(path.len(), 65);

    for p in &path {
        assert!(distance_to_square(*p) < 1.0, "{:?} strays from the square", p);
    }

    let c = centroid(&path[..64]).unwrap();
    assert_abs_diff_eq!(c.x, 5.0, epsilon = 0.25);
    assert_abs_diff_eq!(c.y, 5.0, epsilon = 0.25);
}

#[test]
fn reconstruction_retraces_samples_in_reverse() {
    let options = ResampleOptions {
        smoothing_passes: 0,
        spline: false,
        ..ResampleOptions::default()
    };
    let n = 48;
    let samples = resample(&square_corners(), n, &options);
    let path = reconstruct_path(&analyze(&samples), n);

    // Step m of one period lands on sample (N - m) mod N.
    for (m, rebuilt) in path.iter().take(n).enumerate() {
        let sample = samples[(n - m) % n];
        assert_abs_diff_eq!(sample.x, rebuilt.x, epsilon = 1e-9);
        assert_abs_diff_eq!(sample.y, rebuilt.y, epsilon = 1e-9);
    }
}

#[test]
fn drawn_circle_survives_default_pipeline() {
    let center = Point2D::new(300.0, 240.0);
    let stroke: Vec<Point2D> = (0..200)
        .map(|i| center + Point2D::from_polar(100.0, i as f64 / 200.0 * TAU))
        .collect();

    let samples = resample(&stroke, 256, &ResampleOptions::default());
    let components = analyze(&samples);
    let path = reconstruct_path(&components, 256);

    for p in &path {
        assert_abs_diff_eq!(p.distance(center), 100.0, epsilon = 1.0);
    }

    // Besides the DC offset, the drawing is one dominant rotation.
    let non_dc: Vec<_> = components.iter().filter(|c| !c.is_dc()).collect();
    assert_abs_diff_eq!(non_dc[0].amplitude, 100.0, epsilon = 1.0);
    assert!(non_dc[1].amplitude < 2.0);
}

#[test]
fn default_pipeline_spaces_samples_evenly() {
    let center = Point2D::new(400.0, 300.0);
    let stroke: Vec<Point2D> = (0..300)
        .map(|i| {
            let t = i as f64 / 300.0 * TAU;
            center + Point2D::new(160.0 * t.cos(), 60.0 * t.sin())
        })
        .collect();

    let samples = resample(&stroke, 256, &ResampleOptions::default());
    assert_eq!(samples.len(), 256);
    assert_abs_diff_eq!(samples[0].x, samples[255].x, epsilon = 1e-9);
    assert_abs_diff_eq!(samples[0].y, samples[255].y, epsilon = 1e-9);

    let steps: Vec<f64> = samples.windows(2).map(|w| w[0].distance(w[1])).collect();
    let mean = steps.iter().sum::<f64>() / steps.len() as f64;
    assert!(mean > 2.0);
    for (i, step) in steps.iter().enumerate() {
        assert!(
            (step - mean).abs() < mean * 2e-3,
            "step {} is {} but the mean is {}",
            i,
            step,
            mean
        );
    }
}

#[test]
fn frames_are_periodic() {
    let samples = resample(&square_corners(), 32, &ResampleOptions::default());
    let components = analyze(&samples);

    for &t in &[0.0, 0.5, 2.0, 5.5, 31.0] {
        for limit in [1, 5, 32] {
            let a = reconstruct_frame(&components, t, limit).tip().unwrap();
            let b = reconstruct_frame(&components, t + TAU, limit).tip().unwrap();
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-6);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn trail_keeps_latest_tips_in_order() {
    let samples = resample(&square_corners(), 32, &ResampleOptions::default());
    let mut driver = AnimationDriver::new(8, 1.5, 10);
    driver.set_components(analyze(&samples));

    let tips: Vec<Point2D> = (0..25).map(|_| driver.tick(0.02).tip().unwrap()).collect();

    assert_eq!(driver.trail().len(), 10);
    assert_eq!(driver.trail().snapshot(), tips[15..].to_vec());
}

#[test]
fn empty_state_never_panics() {
    assert!(reconstruct_frame(&[], 1.0, 10).is_empty());

    let mut driver = AnimationDriver::default();
    driver.set_components(analyze(&[]));
    assert_eq!(driver.state(), AnimationState::Idle);
    assert!(driver.tick(1.0).is_empty());

    let mut session = FourierSession::new(FourierConfig::default());
    assert!(session.finish_drawing().is_err());
    assert_eq!(session.state(), AnimationState::Idle);
    assert!(session.tick(0.016).is_empty());
}
