//! Render module - UI components for visualization
//!
//! This module provides:
//! - Epicycle canvas widget (drawing input + playback display)
//! - Spectrum and phase views of the analysed components

mod canvas;
mod spectrum;

pub use canvas::{CanvasSettings, EpicycleCanvas};
pub use spectrum::SpectrumView;
