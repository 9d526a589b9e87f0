//! Analysis - one pass from raw drawing to playable components
//!
//! `Analysis::run` is the whole pipeline: resample, analyse, trace the
//! reconstructed path. It is pure and can run on the caller's thread or
//! on an [`AnalysisWorker`] thread.
//!
//! ## Generations
//!
//! Every submitted job carries a generation number. Results are handed
//! back tagged with it, and the session only accepts a result whose
//! generation is the newest it has issued. A slow job for an old drawing
//! can therefore never overwrite a newer one.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Instant;

use crate::config::FourierConfig;
use crate::error::FourierError;
use crate::fourier::{analyze, FourierComponent};
use crate::geometry::{centroid, Point2D};
use crate::path::resample;
use crate::reconstruct::reconstruct_path;

/// Fewest raw points that make a meaningful drawing
pub const MIN_DRAWING_POINTS: usize = 2;

/// Check that a raw drawing can be analysed
pub fn validate_drawing(drawing: &[Point2D]) -> Result<(), FourierError> {
    if drawing.len() < MIN_DRAWING_POINTS {
        return Err(FourierError::InsufficientInput {
            got: drawing.len(),
            needed: MIN_DRAWING_POINTS,
        });
    }
    match drawing.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(FourierError::NonFinite(index)),
        None => Ok(()),
    }
}

/// Everything derived from one finished drawing
#[derive(Clone, Debug)]
pub struct Analysis {
    pub equidistant: Vec<Point2D>,
    /// Components sorted by descending amplitude
    pub components: Vec<FourierComponent>,
    /// Closed reconstructed curve using every component
    pub path: Vec<Point2D>,
    pub centroid: Option<Point2D>,
}

impl Analysis {
    /// Run the full pipeline on a raw drawing
    ///
    /// Fails with [`FourierError::InsufficientInput`] for drawings shorter
    /// than [`MIN_DRAWING_POINTS`] and with [`FourierError::NonFinite`] if
    /// any coordinate is NaN or infinite.
    pub fn run(drawing: &[Point2D], config: &FourierConfig) -> Result<Self, FourierError> {
        validate_drawing(drawing)?;

        let started = Instant::now();
        let equidistant = resample(drawing, config.sample_count, &config.resample_options());
        let components = analyze(&equidistant);
        let path = reconstruct_path(&components, config.path_steps);
        let centroid = centroid(&equidistant);

        log::debug!(
            "analysis of {} points took {:?}",
            drawing.len(),
            started.elapsed()
        );

        Ok(Self {
            equidistant,
            components,
            path,
            centroid,
        })
    }
}

/// A finished job: its generation and outcome
pub type AnalysisResult = (u64, Result<Analysis, FourierError>);

struct AnalysisJob {
    generation: u64,
    drawing: Vec<Point2D>,
    config: FourierConfig,
}

/// Runs analyses on one long-lived background thread
///
/// Jobs queue up on a channel. When the thread picks up work it skips
/// straight to the newest queued job, so a burst of submissions (a
/// slider being dragged) costs one analysis per finished job instead of
/// one per submission. The newest job is never skipped. Results come
/// back over a second channel and are collected with
/// [`AnalysisWorker::drain`] or [`AnalysisWorker::wait`].
pub struct AnalysisWorker {
    /// `None` if the thread could not be started; jobs then run inline
    jobs: Option<Sender<AnalysisJob>>,
    results_tx: Sender<AnalysisResult>,
    results: Receiver<AnalysisResult>,
}

impl AnalysisWorker {
    pub fn new() -> Self {
        let (jobs_tx, jobs_rx) = mpsc::channel();
        let (results_tx, results) = mpsc::channel();
        let thread_results = results_tx.clone();

        let jobs = match thread::Builder::new()
            .name("fourier-analysis".to_string())
            .spawn(move || run_jobs(jobs_rx, thread_results))
        {
            Ok(_) => Some(jobs_tx),
            Err(e) => {
                log::warn!("Failed to spawn analysis thread ({}), analysing inline", e);
                None
            }
        };

        Self {
            jobs,
            results_tx,
            results,
        }
    }

    /// Queue `drawing` for background analysis
    ///
    /// A result for `generation` is delivered unless a newer job is
    /// submitted before this one starts.
    pub fn submit(&self, generation: u64, drawing: Vec<Point2D>, config: FourierConfig) {
        let job = AnalysisJob {
            generation,
            drawing,
            config,
        };

        let job = match &self.jobs {
            Some(jobs) => match jobs.send(job) {
                Ok(()) => return,
                Err(mpsc::SendError(job)) => {
                    log::warn!("analysis thread has stopped, running job inline");
                    job
                }
            },
            None => job,
        };

        let result = Analysis::run(&job.drawing, &job.config);
        let _ = self.results_tx.send((job.generation, result));
    }

    /// Collect every result that has arrived so far, oldest first
    pub fn drain(&self) -> Vec<AnalysisResult> {
        self.results.try_iter().collect()
    }

    /// Block until the next result arrives
    pub fn wait(&self) -> Option<AnalysisResult> {
        self.results.recv().ok()
    }
}

/// Worker thread body; ends once the worker is dropped
fn run_jobs(jobs: Receiver<AnalysisJob>, results: Sender<AnalysisResult>) {
    while let Ok(mut job) = jobs.recv() {
        for newer in jobs.try_iter() {
            log::debug!("skipping superseded analysis (generation {})", job.generation);
            job = newer;
        }

        let result = Analysis::run(&job.drawing, &job.config);
        if results.send((job.generation, result)).is_err() {
            break;
        }
    }
    log::debug!("analysis thread exiting");
}

impl Default for AnalysisWorker {
    fn default() -> Self {
        Self::new()
    }
}
