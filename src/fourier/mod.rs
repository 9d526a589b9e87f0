//! Fourier module - analysing a closed curve into rotating vectors
//!
//! This module provides:
//! - `FourierComponent` (frequency, amplitude, phase)
//! - `analyze` - direct DFT of an equidistant point sequence
//! - Spectrum helpers: strongest harmonics, power spectrum, phase correlation

mod component;
mod dft;
mod spectrum;

pub use component::{normalize_phase, FourierComponent};
pub use dft::{analyze, coefficient, frequency_range, sort_by_frequency};
pub use spectrum::{
    dc_component, phase_correlation, power_spectrum, strongest, total_power, SpectrumBin,
};
