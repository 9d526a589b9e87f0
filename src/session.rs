//! FourierSession - one drawing surface and its analysis
//!
//! The session owns everything a renderer needs to show a single
//! drawing: the raw stroke, the equidistant samples, the component set,
//! the reconstructed path and the animation driver. Renderers only read
//! from it.
//!
//! ## Lifecycle
//!
//! ```text
//! start_drawing → add_point* → finish_drawing → tick* → clear
//! ```
//!
//! A new gesture replaces the previous stroke. The previous animation
//! keeps running until the new stroke is finished.

use crate::analysis::{validate_drawing, Analysis, AnalysisResult, AnalysisWorker};
use crate::animation::{AnimationDriver, AnimationState, Trail};
use crate::config::FourierConfig;
use crate::error::FourierError;
use crate::fourier::FourierComponent;
use crate::geometry::Point2D;
use crate::reconstruct::{reconstruct_path, AnimationFrame};

/// Drawing, analysis and playback state for one canvas
pub struct FourierSession {
    config: FourierConfig,

    drawing: Vec<Point2D>,
    is_drawing: bool,

    equidistant: Vec<Point2D>,
    path: Vec<Point2D>,
    centroid: Option<Point2D>,
    driver: AnimationDriver,

    /// Newest analysis generation issued; older results are discarded
    generation: u64,
    /// Background analysis, `None` runs everything inline
    worker: Option<AnalysisWorker>,
    /// Generation submitted to the worker and not yet applied
    pending: Option<u64>,
}

impl FourierSession {
    /// Create a session that analyses on the calling thread
    pub fn new(config: FourierConfig) -> Self {
        let config = config.sanitized();
        let mut driver = AnimationDriver::new(
            config.frequencies_amount,
            config.animation_speed,
            config.trail_length,
        );
        driver.set_easing(config.easing);

        Self {
            config,
            drawing: Vec::new(),
            is_drawing: false,
            equidistant: Vec::new(),
            path: Vec::new(),
            centroid: None,
            driver,
            generation: 0,
            worker: None,
            pending: None,
        }
    }

    /// Create a session that analyses on a background thread
    ///
    /// Results must be collected with [`FourierSession::poll_worker`].
    pub fn with_worker(config: FourierConfig) -> Self {
        Self {
            worker: Some(AnalysisWorker::new()),
            ..Self::new(config)
        }
    }

    // Gesture input

    /// Begin a new stroke at `point`, discarding the previous stroke
    pub fn start_drawing(&mut self, point: Point2D) {
        self.drawing.clear();
        self.drawing.push(point);
        self.is_drawing = true;
    }

    /// Append a sample to the current stroke (ignored between strokes)
    pub fn add_point(&mut self, point: Point2D) {
        if self.is_drawing {
            self.drawing.push(point);
        }
    }

    /// End the current stroke and analyse it
    ///
    /// # Returns
    /// The generation number of the analysis that was started. Inline
    /// sessions have already applied it; worker sessions apply it on a
    /// later [`poll_worker`](Self::poll_worker).
    ///
    /// A stroke that is too short leaves the session idle and returns the
    /// error; callers typically log it and carry on.
    pub fn finish_drawing(&mut self) -> Result<u64, FourierError> {
        self.is_drawing = false;
        log::info!("drawing finished with {} points", self.drawing.len());
        self.reanalyze()
    }

    /// Analyse the retained stroke again (e.g. after a config change)
    pub fn reanalyze(&mut self) -> Result<u64, FourierError> {
        self.generation += 1;
        let generation = self.generation;

        if self.worker.is_some() {
            if let Err(e) = validate_drawing(&self.drawing) {
                self.pending = None;
                self.reset_analysis();
                return Err(e);
            }
            if let Some(worker) = &self.worker {
                worker.submit(generation, self.drawing.clone(), self.config.clone());
                self.pending = Some(generation);
            }
            return Ok(generation);
        }

        match Analysis::run(&self.drawing, &self.config) {
            Ok(analysis) => {
                self.apply(analysis);
                Ok(generation)
            }
            Err(e) => {
                self.reset_analysis();
                Err(e)
            }
        }
    }

    /// Apply any finished background analyses
    ///
    /// Only a result for the newest generation is used; results for older
    /// drawings are dropped. Returns `true` if the session changed.
    pub fn poll_worker(&mut self) -> bool {
        let results = match &self.worker {
            Some(worker) => worker.drain(),
            None => return false,
        };

        let mut changed = false;
        for result in results {
            changed |= self.accept(result);
        }
        changed
    }

    /// Block until the newest submitted analysis has been applied
    ///
    /// Returns immediately with `false` when nothing is in flight.
    pub fn wait_for_analysis(&mut self) -> bool {
        let mut changed = false;
        while self.pending.is_some() {
            let next = match &self.worker {
                Some(worker) => worker.wait(),
                None => None,
            };
            match next {
                Some(result) => changed |= self.accept(result),
                None => self.pending = None,
            }
        }
        changed
    }

    /// Apply a worker result if it belongs to the newest generation
    fn accept(&mut self, (generation, result): AnalysisResult) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale analysis (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }

        self.pending = None;
        match result {
            Ok(analysis) => self.apply(analysis),
            Err(e) => {
                log::warn!("analysis failed: {}", e);
                self.reset_analysis();
            }
        }
        true
    }

    /// Drop the stroke and all derived data; the session becomes idle
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.is_drawing = false;
        // Invalidate anything still in flight.
        self.generation += 1;
        self.pending = None;
        self.reset_analysis();
        log::info!("session cleared");
    }

    fn apply(&mut self, analysis: Analysis) {
        log::info!(
            "analysis ready: {} samples, {} components",
            analysis.equidistant.len(),
            analysis.components.len()
        );
        self.equidistant = analysis.equidistant;
        self.path = analysis.path;
        self.centroid = analysis.centroid;
        self.driver.set_components(analysis.components);
    }

    fn reset_analysis(&mut self) {
        self.equidistant.clear();
        self.path.clear();
        self.centroid = None;
        self.driver.clear();
    }

    // Playback

    /// Advance the animation by `delta` seconds
    pub fn tick(&mut self, delta: f64) -> &AnimationFrame {
        self.driver.tick(delta)
    }

    // Configuration

    pub fn config(&self) -> &FourierConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// Playback options apply immediately. Resampling options trigger a
    /// new analysis of the retained stroke; a new `path_steps` only
    /// re-traces the reconstructed path.
    pub fn set_config(&mut self, config: FourierConfig) {
        let config = config.sanitized();
        let reanalyze = self.config.needs_reanalysis(&config);
        let retrace = self.config.path_steps != config.path_steps;

        self.driver.set_limit(config.frequencies_amount);
        self.driver.set_speed(config.animation_speed);
        self.driver.set_trail_length(config.trail_length);
        self.driver.set_easing(config.easing);
        self.config = config;

        if reanalyze && !self.drawing.is_empty() && !self.is_drawing {
            if let Err(e) = self.reanalyze() {
                log::warn!("re-analysis skipped: {}", e);
            }
        } else if retrace {
            self.path = reconstruct_path(self.driver.components(), self.config.path_steps);
        }
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.config.frequencies_amount = limit;
        self.driver.set_limit(limit);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.config.animation_speed = speed;
        self.driver.set_speed(speed);
    }

    pub fn set_trail_length(&mut self, length: usize) {
        self.config.trail_length = length;
        self.driver.set_trail_length(length);
    }

    pub fn clear_trail(&mut self) {
        self.driver.clear_trail();
    }

    // Read-only views for renderers

    /// Raw samples of the current (or last) stroke
    pub fn drawing(&self) -> &[Point2D] {
        &self.drawing
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn equidistant_path(&self) -> &[Point2D] {
        &self.equidistant
    }

    /// Components in descending amplitude order
    pub fn components(&self) -> &[FourierComponent] {
        self.driver.components()
    }

    /// Precomputed closed reconstruction using every component
    pub fn reconstructed_path(&self) -> &[Point2D] {
        &self.path
    }

    pub fn frame(&self) -> &AnimationFrame {
        self.driver.frame()
    }

    pub fn trail(&self) -> &Trail {
        self.driver.trail()
    }

    pub fn centroid(&self) -> Option<Point2D> {
        self.centroid
    }

    pub fn state(&self) -> AnimationState {
        self.driver.state()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn time(&self) -> f64 {
        self.driver.time()
    }
}

impl Default for FourierSession {
    fn default() -> Self {
        Self::new(FourierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> FourierConfig {
        FourierConfig {
            sample_count: 64,
            path_steps: 64,
            frequencies_amount: 10,
            trail_length: 4,
            ..FourierConfig::default()
        }
    }

    fn draw_circle(session: &mut FourierSession, radius: f64) {
        let points: Vec<Point2D> = (0..60)
            .map(|i| Point2D::from_polar(radius, i as f64 / 60.0 * std::f64::consts::TAU))
            .map(|p| p + Point2D::new(200.0, 200.0))
            .collect();
        session.start_drawing(points[0]);
        for &p in &points[1..] {
            session.add_point(p);
        }
    }

    #[test]
    fn test_gesture_to_animation() {
        let mut session = FourierSession::new(small_config());
        assert_eq!(session.state(), AnimationState::Idle);

        draw_circle(&mut session, 50.0);
        assert!(session.is_drawing());
        assert_eq!(session.drawing().len(), 60);

        let generation = session.finish_drawing().unwrap();
        assert_eq!(generation, 1);
        assert_eq!(session.state(), AnimationState::Animating);
        assert_eq!(session.equidistant_path().len(), 64);
        assert_eq!(session.components().len(), 64);
        assert_eq!(session.reconstructed_path().len(), 65);

        for _ in 0..10 {
            session.tick(0.05);
        }
        assert_eq!(session.frame().len(), 10);
        assert_eq!(session.trail().len(), 4);
    }

    #[test]
    fn test_points_outside_gesture_ignored() {
        let mut session = FourierSession::default();
        session.add_point(Point2D::new(1.0, 1.0));
        assert!(session.drawing().is_empty());
    }

    #[test]
    fn test_short_drawing_stays_idle() {
        let mut session = FourierSession::new(small_config());
        session.start_drawing(Point2D::new(0.0, 0.0));

        let err = session.finish_drawing().unwrap_err();
        assert!(matches!(err, FourierError::InsufficientInput { got: 1, .. }));
        assert_eq!(session.state(), AnimationState::Idle);
        assert!(session.tick(0.1).is_empty());
    }

    #[test]
    fn test_two_point_stroke_animates() {
        let mut session = FourierSession::new(small_config());
        session.start_drawing(Point2D::new(0.0, 0.0));
        session.add_point(Point2D::new(50.0, 0.0));

        assert!(session.finish_drawing().is_ok());
        assert_eq!(session.state(), AnimationState::Animating);
        assert_eq!(session.equidistant_path().len(), 64);
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut session = FourierSession::new(small_config());
        draw_circle(&mut session, 30.0);
        session.finish_drawing().unwrap();
        session.clear();

        assert_eq!(session.state(), AnimationState::Idle);
        assert!(session.drawing().is_empty());
        assert!(session.reconstructed_path().is_empty());
        assert!(session.centroid().is_none());
    }

    #[test]
    fn test_playback_config_does_not_reanalyze() {
        let mut session = FourierSession::new(small_config());
        draw_circle(&mut session, 30.0);
        session.finish_drawing().unwrap();
        let generation = session.generation();

        session.set_config(FourierConfig {
            frequencies_amount: 3,
            animation_speed: 4.0,
            ..small_config()
        });
        assert_eq!(session.generation(), generation);
        assert_eq!(session.frame().len(), 3);

        session.set_config(FourierConfig {
            sample_count: 32,
            ..session.config().clone()
        });
        assert_eq!(session.generation(), generation + 1);
        assert_eq!(session.components().len(), 32);
    }

    #[test]
    fn test_path_steps_change_retraces() {
        let mut session = FourierSession::new(small_config());
        draw_circle(&mut session, 30.0);
        session.finish_drawing().unwrap();

        session.set_config(FourierConfig {
            path_steps: 16,
            ..session.config().clone()
        });
        assert_eq!(session.reconstructed_path().len(), 17);
    }

    #[test]
    fn test_worker_applies_latest_generation_only() {
        let mut session = FourierSession::with_worker(small_config());

        draw_circle(&mut session, 20.0);
        let first = session.finish_drawing().unwrap();
        draw_circle(&mut session, 80.0);
        let second = session.finish_drawing().unwrap();
        assert!(second > first);

        assert!(session.wait_for_analysis());
        assert!(!session.wait_for_analysis());

        assert_eq!(session.state(), AnimationState::Animating);
        let centroid = session.centroid().unwrap();
        let radius = session.equidistant_path()[0].distance(centroid);
        assert!(radius > 60.0, "stale analysis applied (radius {})", radius);
    }

    #[test]
    fn test_worker_result_dropped_after_clear() {
        let mut session = FourierSession::with_worker(small_config());
        draw_circle(&mut session, 40.0);
        session.finish_drawing().unwrap();
        session.clear();

        assert!(!session.wait_for_analysis());
        assert_eq!(session.state(), AnimationState::Idle);
    }
}
