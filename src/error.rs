//! Error types for the analysis boundary
//!
//! The numeric core never fails; degenerate input produces degenerate but
//! well-defined output. Errors only appear where a finished drawing is
//! turned into an analysis.

use thiserror::Error;

/// Reasons a drawing could not be analysed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FourierError {
    #[error("drawing has {got} points, at least {needed} are required")]
    InsufficientInput { got: usize, needed: usize },

    #[error("drawing contains a non-finite coordinate at index {0}")]
    NonFinite(usize),
}
