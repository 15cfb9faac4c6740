//! # figure-eight
//! ## Sample a parametric curve, get a figure back
//!
//! This crate traces the figure-eight curve
//! ```math
//! x = sin(2θ) / 2,  y = cos(θ)
//! ```
//! over one full turn of `θ` and hands you a renderable figure of it.
//!
//! The simplest use-case is the default figure: 100 evenly spaced angles over `0..=2π`,
//! a 3×6 inch canvas, one axes region, one line:
//! ```rust
//! let figure = figure_eight::build_figure();
//!
//! let line = &figure.axes()[0].lines()[0];
//! assert_eq!(line.len(), 100);
//! assert_eq!(line.points()[0], (0.0, 1.0));
//! ```
//!
//! # Core Concepts
//! - A [`ParametricCurve`] maps an angle to a point.
//!     - [`FigureEight`] is the curve this crate is named for.
//!     - [`ParametricCurve::sample`] evaluates it at evenly spaced angles (see [`value::linspace`]).
//! - A [`CurveSamples`] holds the sampled angles and the points they map to, always of equal length.
//! - A [`Figure`] is a canvas holding one or more [`Axes`], each holding one or more [`Line`]s.
//!     - [`build_figure`] builds the default figure-eight figure.
//!     - [`build_figure_with`] does the same with custom [`FigureOptions`] and any float type.
//!
//! # Rendering
//!
//! With the `plotting` feature (on by default), figures can be drawn through `plotters`:
//! - [`Figure::render_svg`] returns an SVG document
//! - [`Figure::save_png`] writes a PNG file
//! - [`plot!`] writes a PNG file with a generated name under `target/plot_output`
//!
//! # Testing utilities
//!
//! Float assertion macros used by this crate's own tests are exported too. See [`test`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // Sample indices are tiny
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plotting;

pub mod curve;
pub mod error;
pub mod value;

mod figure;

pub use curve::{CurveSamples, FigureEight, ParametricCurve};
pub use figure::*;

pub use nalgebra;
