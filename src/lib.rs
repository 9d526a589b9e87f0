//! epicycles - redraw a hand-drawn closed curve as rotating vectors
//!
//! The crate turns a raw pointer stroke into a Fourier series and replays
//! it as a chain of epicycles.
//!
//! ## Pipeline
//!
//! ```text
//! raw stroke ─► path::resample ─► fourier::analyze ─► reconstruct::reconstruct_path
//!                                        │
//!                                        └─► animation::AnimationDriver::tick (per frame)
//! ```
//!
//! [`FourierSession`] wires these together behind a gesture API
//! (`start_drawing` / `add_point` / `finish_drawing`). Everything below
//! the session is a pure function of its inputs. Rendering, input
//! handling and timers belong to the caller.

pub mod analysis;
pub mod animation;
pub mod config;
pub mod error;
pub mod fourier;
pub mod geometry;
pub mod path;
pub mod reconstruct;
pub mod session;

pub use analysis::{Analysis, AnalysisWorker, MIN_DRAWING_POINTS};
pub use animation::{AnimationDriver, AnimationEasing, AnimationState, Trail};
pub use config::FourierConfig;
pub use error::FourierError;
pub use fourier::{analyze, FourierComponent};
pub use geometry::Point2D;
pub use path::{resample, ResampleOptions};
pub use reconstruct::{reconstruct_frame, reconstruct_path, AnimationFrame, EpicycleArm};
pub use session::FourierSession;
