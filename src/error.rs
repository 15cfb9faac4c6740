//! Error types for curve sampling and figure construction
//!
//! This module defines the errors encountered when building figures from
//! caller-supplied options, along with a convenient `Result` alias.
//!
//! The default builder, [`crate::build_figure`], never fails; these only
//! surface through the configurable entry points.

/// Errors that can occur while sampling curves or building figures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A line needs at least two points to be drawn.
    #[error("At least 2 samples are required to trace a curve, got {0}")]
    TooFewSamples(usize),

    /// The figure size or density is zero, negative, or not finite.
    #[error("Figure size must be positive and finite [width: {width}, height: {height}, dpi: {dpi}]")]
    InvalidSize {
        /// Width in inches
        width: f64,
        /// Height in inches
        height: f64,
        /// Pixels per inch
        dpi: u32,
    },

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for curve sampling and figure construction
pub type Result<T> = std::result::Result<T, Error>;
