//! Numeric types and sampling utilities for parametric curves.
//!
//! This module defines the [`Value`] trait, which abstracts the floating
//! point types a curve can be sampled in, and [`linspace`], the evenly spaced
//! sample generator every curve is traced with.
//!
//! # Traits
//!
//! - [`Value`]: Extends `RealField` and `FloatCore` to provide:
//!   - `two()` and `half()` constants.
//!   - `try_cast` for safe type conversion with error handling.
//! - [`CoordExt`]: Accessors for sequences of `(x, y)` pairs.
//!
//! # Iterators
//!
//! - [`Linspace`]: `count` evenly spaced values from `start` to `stop`,
//!   both ends included.
//!
//! # Example
//!
//! ```rust
//! use figure_eight::value::{linspace, Value};
//!
//! // 5 values from 0.0 to 1.0: 0.0, 0.25, 0.5, 0.75, 1.0
//! let xs: Vec<f64> = linspace(0.0, 1.0, 5).collect();
//! assert_eq!(xs.len(), 5);
//! assert_eq!(xs[4], 1.0);
//!
//! let half = f64::half();
//! ```
use std::ops::Range;

use crate::error::Error;

/// Numeric type for curves
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the value 0.5
    #[must_use]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(<Self as num_traits::float::FloatCore>::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

/// Returns `count` evenly spaced values over `start..=stop`.
///
/// - `count == 0` yields nothing
/// - `count == 1` yields only `start`
/// - Otherwise the first value is exactly `start`, the last exactly `stop`,
///   and consecutive values differ by `(stop - start) / (count - 1)`
#[must_use]
pub fn linspace<T: Value>(start: T, stop: T, count: usize) -> Linspace<T> {
    Linspace::new(start, stop, count)
}

/// Iterator over evenly spaced values in a closed interval.
///
/// See [`linspace`].
#[derive(Debug, Clone)]
pub struct Linspace<T: Value> {
    start: T,
    stop: T,
    step: T,
    count: usize,
    index: usize,
}
impl<T: Value> Linspace<T> {
    /// Creates a new iterator over `count` values from `start` to `stop` inclusive
    #[must_use]
    pub fn new(start: T, stop: T, count: usize) -> Self {
        let step = if count > 1 {
            (stop - start) / T::from_positive_int(count - 1)
        } else {
            T::zero()
        };

        Self {
            start,
            stop,
            step,
            count,
            index: 0,
        }
    }

    /// Distance between consecutive values
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }
}
impl<T: Value> Iterator for Linspace<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let i = self.index;
        self.index += 1;

        // Pin the end point so accumulated rounding never moves it
        if i + 1 == self.count && i > 0 {
            Some(self.stop)
        } else {
            Some(self.start + self.step * T::from_positive_int(i))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for Linspace<T> {}

/// Extension trait for accessing the `x` and `y` coordinates of a sequence of points.
///
/// # Examples
///
/// ```
/// # use figure_eight::value::CoordExt;
/// let data: Vec<(f64, f64)> = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y(), vec![-2.0, 3.0, 1.0]);
/// assert_eq!(data.x_range(), Some(0.0..2.0));
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates of this value.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates of this value.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates of this value.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates of this value.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }

    /// Returns the range of x-coordinates of this value.
    fn x_range(&self) -> Option<Range<T>> {
        span(self.x_iter())
    }

    /// Returns the range of y-coordinates of this value.
    fn y_range(&self) -> Option<Range<T>> {
        span(self.y_iter())
    }

    /// Converts the coordinates of this value to `f64`.
    ///
    /// # Errors
    /// Returns an error if any of the coordinates cannot be converted to `f64`.
    fn as_f64(&self) -> crate::error::Result<Vec<(f64, f64)>> {
        self.x_iter()
            .zip(self.y_iter())
            .map(|(x, y)| Ok((f64::try_cast(x)?, f64::try_cast(y)?)))
            .collect()
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

fn span<T: Value>(values: impl Iterator<Item = T>) -> Option<Range<T>> {
    values
        .fold(None, |acc: Option<(T, T)>, v| {
            Some(match acc {
                Some((min, max)) => (
                    nalgebra::RealField::min(min, v),
                    nalgebra::RealField::max(max, v),
                ),
                None => (v, v),
            })
        })
        .map(|(start, end)| start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_linspace_endpoints() {
        let values: Vec<f64> = linspace(0.0, std::f64::consts::TAU, 100).collect();
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[99], std::f64::consts::TAU);

        let step = std::f64::consts::TAU / 99.0;
        for (i, w) in values.windows(2).enumerate() {
            assert_close!(w[1] - w[0], step, tolerance = 1e-12, "step {}", i);
        }
    }

    #[test]
    fn test_linspace_small_counts() {
        assert_eq!(linspace(1.0, 2.0, 0).count(), 0);
        assert_eq!(linspace(1.0, 2.0, 1).collect::<Vec<f64>>(), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2).collect::<Vec<f64>>(), vec![1.0, 2.0]);
        assert_eq!(
            linspace(0.0, 1.0, 5).collect::<Vec<f64>>(),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
    }

    #[test]
    fn test_linspace_descending_and_exact_size() {
        let mut iter = linspace(1.0f32, -1.0, 3);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.step(), -1.0);
        assert_eq!(iter.next(), Some(1.0));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![0.0, -1.0]);
    }

    #[test]
    fn test_coord_ranges() {
        let data: Vec<(f64, f64)> = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
        assert_eq!(data.x(), vec![1.5, 2.0, 0.0]);
        assert_eq!(data.x_range(), Some(0.0..2.0));
        assert_eq!(data.y_range(), Some(-2.0..3.0));

        let empty: Vec<(f64, f64)> = Vec::new();
        assert_eq!(empty.x_range(), None);
    }

    #[test]
    fn test_as_f64() {
        let data: Vec<(f32, f32)> = vec![(0.5, 1.0), (-0.25, 2.0)];
        let converted = data.as_f64().unwrap();
        assert_eq!(converted, vec![(0.5, 1.0), (-0.25, 2.0)]);
    }
}
