//! Parametric curves and their sampled coordinates.
//!
//! A [`ParametricCurve`] maps an angle `θ` to a point `(x(θ), y(θ))`.
//! Sampling one draws evenly spaced angles over its [`ParametricCurve::domain`]
//! with [`crate::value::linspace`] and evaluates every angle in order.
//!
//! [`FigureEight`] is the self-intersecting curve
//! ```math
//! x = sin(2θ) / 2,  y = cos(θ)
//! ```
//! traced once as `θ` sweeps `0..=2π`.
use std::ops::RangeInclusive;

use crate::{
    error::Result,
    figure::{Figure, FigureOptions, Line},
    value::{linspace, CoordExt, Value},
};

/// A curve described by a pair of functions of one angle.
pub trait ParametricCurve<T: Value> {
    /// Horizontal coordinate at angle `theta`
    fn x(&self, theta: T) -> T;

    /// Vertical coordinate at angle `theta`
    fn y(&self, theta: T) -> T;

    /// Point at angle `theta`
    fn point(&self, theta: T) -> (T, T) {
        (self.x(theta), self.y(theta))
    }

    /// Range of angles sampled by [`ParametricCurve::sample`]
    ///
    /// Defaults to one full turn, `0..=2π`
    fn domain(&self) -> RangeInclusive<T> {
        T::zero()..=T::two_pi()
    }

    /// Samples `count` evenly spaced angles over the domain, both ends included,
    /// and evaluates the curve at each of them in order.
    fn sample(&self, count: usize) -> CurveSamples<T> {
        let domain = self.domain();
        let angles = linspace(*domain.start(), *domain.end(), count).collect();
        CurveSamples::trace(self, angles)
    }

    /// Samples the curve and places it as the only line of a new figure.
    ///
    /// # Errors
    /// Returns an error if the options ask for fewer than 2 samples, or for a
    /// figure with no area.
    fn figure(&self, options: &FigureOptions) -> Result<Figure<T>> {
        options.validate()?;
        let samples = self.sample(options.samples);
        Ok(Figure::from_samples(samples, options))
    }
}

/// The figure-eight curve `x = sin(2θ)/2`, `y = cos(θ)`.
///
/// Both lobes are traced once per turn; the curve crosses itself at the
/// origin when `θ = π/2` and `θ = 3π/2`. Horizontal values stay in
/// `[-0.5, 0.5]`, vertical values in `[-1, 1]`.
///
/// ```rust
/// use figure_eight::{FigureEight, ParametricCurve};
///
/// let (x, y) = FigureEight.point(0.0_f64);
/// assert_eq!((x, y), (0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FigureEight;
impl<T: Value> ParametricCurve<T> for FigureEight {
    fn x(&self, theta: T) -> T {
        nalgebra::ComplexField::sin(T::two() * theta) / T::two()
    }

    fn y(&self, theta: T) -> T {
        nalgebra::ComplexField::cos(theta)
    }
}

/// Angles sampled from a curve, and the points they map to.
///
/// Both sequences always have the same length and come from the same pass
/// over the same angles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurveSamples<T: Value> {
    angles: Vec<T>,
    points: Vec<(T, T)>,
}
impl<T: Value> CurveSamples<T> {
    /// Evaluates `curve` at every angle, in order
    pub fn trace<C: ParametricCurve<T> + ?Sized>(curve: &C, angles: Vec<T>) -> Self {
        let points = angles.iter().map(|theta| curve.point(*theta)).collect();
        Self { angles, points }
    }

    /// The sampled angles
    #[must_use]
    pub fn angles(&self) -> &[T] {
        &self.angles
    }

    /// The `(x, y)` points, one per angle
    #[must_use]
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }

    /// Horizontal coordinates, one per angle
    #[must_use]
    pub fn x(&self) -> Vec<T> {
        self.points.x()
    }

    /// Vertical coordinates, one per angle
    #[must_use]
    pub fn y(&self) -> Vec<T> {
        self.points.y()
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// True if no angles were sampled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Discards the angles and keeps the points
    #[must_use]
    pub fn into_points(self) -> Vec<(T, T)> {
        self.points
    }

    /// Converts the samples into a connected line, in sample order
    #[must_use]
    pub fn into_line(self) -> Line<T> {
        Line::new(self.points)
    }
}
