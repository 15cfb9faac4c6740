//! Figures: a canvas holding axes regions, each holding plotted lines.
//!
//! [`build_figure`] is the main entry point. It samples the [`FigureEight`]
//! curve at 100 angles over `0..=2π` and returns a 3×6 inch figure with one
//! axes region and one line through those points, in sample order.
//!
//! Figures are plain data. Nothing is drawn until one is handed to a
//! plotting backend (see `Figure::render_svg` and `Figure::save_png` with the
//! `plotting` feature).
use std::ops::Range;

use crate::{
    curve::{CurveSamples, FigureEight, ParametricCurve},
    error::{Error, Result},
    value::{CoordExt, Value},
};

/// Number of angles sampled by [`build_figure`]
pub const DEFAULT_SAMPLES: usize = 100;

/// Size of the canvas built by [`build_figure`], in inches (width, height)
pub const DEFAULT_SIZE: (f64, f64) = (3.0, 6.0);

/// Pixels per inch used when a figure is rasterised
pub const DEFAULT_DPI: u32 = 100;

/// Stroke width of a new line, in pixels
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// Fraction of the data span left empty on each side of an axes with no fixed range
pub const AXES_MARGIN: f64 = 0.05;

/// Builds the figure-eight figure.
///
/// - 100 angles, evenly spaced over `0..=2π`
/// - A 3×6 inch canvas with a single axes region
/// - One line through `(sin(2θ)/2, cos(θ))` for every angle, in order
///
/// Every call allocates a fresh figure; nothing is shared between calls.
///
/// ```rust
/// let figure = figure_eight::build_figure();
/// assert_eq!(figure.axes().len(), 1);
/// assert_eq!(figure.axes()[0].lines()[0].len(), 100);
/// ```
#[must_use]
pub fn build_figure() -> Figure<f64> {
    let options = FigureOptions::default();
    Figure::from_samples(FigureEight.sample(options.samples), &options)
}

/// Builds the figure-eight figure in any [`Value`] type, with custom options.
///
/// `build_figure_with::<f64>(&FigureOptions::default())` is equivalent to [`build_figure`].
///
/// # Errors
/// Returns an error if fewer than 2 samples are requested, or the figure has no area.
pub fn build_figure_with<T: Value>(options: &FigureOptions) -> Result<Figure<T>> {
    FigureEight.figure(options)
}

/// Options for building a figure from a curve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FigureOptions {
    /// Number of angles to sample, both ends of the domain included
    pub samples: usize,

    /// Canvas size in inches (width, height)
    pub size: (f64, f64),

    /// Pixels per inch when rasterised
    pub dpi: u32,

    /// Caption for the axes
    pub title: String,
}
impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            size: DEFAULT_SIZE,
            dpi: DEFAULT_DPI,
            title: String::new(),
        }
    }
}
impl FigureOptions {
    /// Checks that the options describe a drawable figure
    ///
    /// # Errors
    /// - [`Error::TooFewSamples`] if fewer than 2 samples are requested
    /// - [`Error::InvalidSize`] if a dimension is not positive and finite, dpi is 0,
    ///   or the canvas would be wider or taller than `u32::MAX` pixels
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(Error::TooFewSamples(self.samples));
        }

        let (width, height) = self.size;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let fits = |v: f64| (v * f64::from(self.dpi)).round() <= f64::from(u32::MAX);
        if !positive(width)
            || !positive(height)
            || self.dpi == 0
            || !fits(width)
            || !fits(height)
        {
            return Err(Error::InvalidSize {
                width,
                height,
                dpi: self.dpi,
            });
        }

        Ok(())
    }
}

/// A canvas holding one or more axes regions.
///
/// Axes are stacked top to bottom in the order they were added.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Figure<T: Value> {
    size: (f64, f64),
    dpi: u32,
    axes: Vec<Axes<T>>,
}
impl<T: Value> Figure<T> {
    /// Creates an empty figure of the given size in inches, at [`DEFAULT_DPI`]
    #[must_use]
    pub fn new(size: (f64, f64)) -> Self {
        Self {
            size,
            dpi: DEFAULT_DPI,
            axes: Vec::new(),
        }
    }

    /// Sets the rasterisation density
    ///
    /// A density of 0 is raised to 1.
    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }

    pub(crate) fn from_samples(samples: CurveSamples<T>, options: &FigureOptions) -> Self {
        let count = samples.len();

        let mut figure = Self::new(options.size).with_dpi(options.dpi);
        let axes = figure.add_axes();
        axes.title.clone_from(&options.title);
        axes.add_line(samples.into_line());

        tracing::debug!(
            samples = count,
            width = options.size.0,
            height = options.size.1,
            dpi = options.dpi,
            "built figure"
        );
        figure
    }

    /// Canvas size in inches
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Pixels per inch
    #[must_use]
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Canvas size in pixels
    ///
    /// Each dimension is clamped to `1..=u32::MAX`; a figure that passed
    /// [`FigureOptions::validate`] never hits the upper bound.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.size.0, self.dpi), to_pixels(self.size.1, self.dpi))
    }

    /// Adds a new, empty axes region below any existing ones
    pub fn add_axes(&mut self) -> &mut Axes<T> {
        self.axes.push(Axes::default());
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    /// The axes regions, top to bottom
    #[must_use]
    pub fn axes(&self) -> &[Axes<T>] {
        &self.axes
    }

    /// Mutable access to the axes regions
    pub fn axes_mut(&mut self) -> &mut [Axes<T>] {
        &mut self.axes
    }

    /// Total number of lines over all axes
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.axes.iter().map(Axes::line_count).sum()
    }
}

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
impl<T: Value> Figure<T> {
    /// Renders the figure to an SVG document
    ///
    /// # Errors
    /// Returns an error if the figure cannot be drawn.
    pub fn render_svg(&self) -> std::result::Result<String, crate::plotting::plotters::SvgError> {
        crate::plotting::render_svg(self)
    }

    /// Renders the figure to a PNG file
    ///
    /// # Errors
    /// Returns an error if the figure cannot be drawn or the file cannot be written.
    pub fn save_png(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> std::result::Result<(), crate::plotting::plotters::PngError> {
        crate::plotting::save_png(self, path)
    }
}

/// A plotting region and the lines drawn in it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axes<T: Value> {
    /// Caption above the region; empty for none
    pub title: String,

    /// X-axis label
    pub x_label: Option<String>,

    /// Y-axis label
    pub y_label: Option<String>,

    /// Fixed x-axis range. Derived from the lines when `None`
    pub x_range: Option<Range<T>>,

    /// Fixed y-axis range. Derived from the lines when `None`
    pub y_range: Option<Range<T>>,

    /// Number of labels to show on the x-axis (if supported by the backend)
    pub x_axis_labels: Option<usize>,

    /// Number of labels to show on the y-axis (if supported by the backend)
    pub y_axis_labels: Option<usize>,

    /// Whether to draw the mesh, ticks and tick labels
    pub show_mesh: bool,

    lines: Vec<Line<T>>,
}
impl<T: Value> Default for Axes<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: None,
            y_label: None,
            x_range: None,
            y_range: None,
            x_axis_labels: None,
            y_axis_labels: None,
            show_mesh: true,
            lines: Vec::new(),
        }
    }
}
impl<T: Value> Axes<T> {
    /// Plots a sequence of points as one connected line, in order
    pub fn plot(&mut self, points: impl IntoIterator<Item = (T, T)>) -> &mut Line<T> {
        self.add_line(Line::new(points.into_iter().collect()));
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Adds an existing line
    pub fn add_line(&mut self, line: Line<T>) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Lines in the order they were plotted
    #[must_use]
    pub fn lines(&self) -> &[Line<T>] {
        &self.lines
    }

    /// Number of lines plotted
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The x-axis range to draw: the fixed range if set, otherwise the span of every line plus [`AXES_MARGIN`]
    #[must_use]
    pub fn view_x_range(&self) -> Range<T> {
        self.x_range
            .clone()
            .unwrap_or_else(|| padded(self.lines.iter().filter_map(|l| l.points().x_range())))
    }

    /// The y-axis range to draw: the fixed range if set, otherwise the span of every line plus [`AXES_MARGIN`]
    #[must_use]
    pub fn view_y_range(&self) -> Range<T> {
        self.y_range
            .clone()
            .unwrap_or_else(|| padded(self.lines.iter().filter_map(|l| l.points().y_range())))
    }
}

/// A connected sequence of points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T: Value> {
    points: Vec<(T, T)>,

    /// Legend entry; lines without one are left out of the legend
    pub label: Option<String>,

    /// Stroke width in pixels
    pub width: u32,
}
impl<T: Value> Line<T> {
    /// Creates an unlabelled line of [`DEFAULT_LINE_WIDTH`]
    #[must_use]
    pub fn new(points: Vec<(T, T)>) -> Self {
        Self {
            points,
            label: None,
            width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Sets the legend entry
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the stroke width
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// The points, in drawing order
    #[must_use]
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the line has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn to_pixels(inches: f64, dpi: u32) -> u32 {
    let pixels = (inches * f64::from(dpi))
        .round()
        .clamp(1.0, f64::from(u32::MAX));
    num_traits::cast(pixels).unwrap_or(1)
}

fn padded<T: Value>(ranges: impl Iterator<Item = Range<T>>) -> Range<T> {
    let merged = ranges.reduce(|a, b| {
        nalgebra::RealField::min(a.start, b.start)..nalgebra::RealField::max(a.end, b.end)
    });
    let Some(range) = merged else {
        return T::zero()..T::one();
    };

    let span = range.end - range.start;
    let margin = if span > T::zero() {
        span * T::try_cast(AXES_MARGIN).unwrap_or_else(|_| T::zero())
    } else {
        T::half()
    };
    (range.start - margin)..(range.end + margin)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::{assert_all_close, assert_close};

    #[test]
    fn test_build_figure_shape() {
        let figure = build_figure();

        assert_eq!(figure.size(), (3.0, 6.0));
        assert_eq!(figure.pixel_size(), (300, 600));
        assert_eq!(figure.axes().len(), 1);
        assert_eq!(figure.line_count(), 1);

        let line = &figure.axes()[0].lines()[0];
        assert_eq!(line.len(), 100);
        assert_eq!(line.label, None);
    }

    #[test]
    fn test_build_figure_points_in_sample_order() {
        let figure = build_figure();
        let points = figure.axes()[0].lines()[0].points();

        for (i, (x, y)) in points.iter().enumerate() {
            let theta = TAU * i as f64 / 99.0;
            assert_close!(*x, (2.0 * theta).sin() / 2.0, "x[{}]", i);
            assert_close!(*y, theta.cos(), "y[{}]", i);
        }
    }

    #[test]
    fn test_build_figure_is_stateless() {
        let a = build_figure();
        let b = build_figure();
        assert_eq!(a, b);
        assert_all_close!(a.axes()[0].lines()[0].points(), b.axes()[0].lines()[0].points());
    }

    #[test]
    fn test_default_options_match_build_figure() {
        let figure = build_figure_with::<f64>(&FigureOptions::default()).unwrap();
        assert_eq!(figure, build_figure());
    }

    #[test]
    fn test_custom_options() {
        let options = FigureOptions {
            samples: 9,
            size: (4.0, 2.5),
            dpi: 50,
            title: "Eight".to_string(),
        };
        let figure = build_figure_with::<f32>(&options).unwrap();

        assert_eq!(figure.pixel_size(), (200, 125));
        assert_eq!(figure.axes()[0].title, "Eight");
        assert_eq!(figure.axes()[0].lines()[0].len(), 9);
    }

    #[test]
    fn test_invalid_options() {
        let too_few = FigureOptions {
            samples: 1,
            ..Default::default()
        };
        assert_eq!(
            build_figure_with::<f64>(&too_few).unwrap_err(),
            Error::TooFewSamples(1)
        );

        let flat = FigureOptions {
            size: (3.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            build_figure_with::<f64>(&flat),
            Err(Error::InvalidSize { .. })
        ));

        let no_dpi = FigureOptions {
            dpi: 0,
            ..Default::default()
        };
        assert!(no_dpi.validate().is_err());

        let infinite = FigureOptions {
            size: (f64::INFINITY, 6.0),
            ..Default::default()
        };
        assert!(infinite.validate().is_err());

        // 1e11 pixels wide does not fit in a u32
        let huge = FigureOptions {
            size: (1e9, 6.0),
            ..Default::default()
        };
        assert_eq!(
            build_figure_with::<f64>(&huge).unwrap_err(),
            Error::InvalidSize {
                width: 1e9,
                height: 6.0,
                dpi: DEFAULT_DPI
            }
        );

        let tall = FigureOptions {
            size: (3.0, 1e7),
            dpi: 1000,
            ..Default::default()
        };
        assert!(tall.validate().is_err());

        let largest = FigureOptions {
            size: (4e7, 6.0),
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_pixel_size_clamped() {
        let huge: Figure<f64> = Figure::new((1e9, 6.0));
        assert_eq!(huge.pixel_size(), (u32::MAX, 600));

        let tiny: Figure<f64> = Figure::new((1e-6, f64::NAN));
        assert_eq!(tiny.pixel_size(), (1, 1));

        let no_dpi: Figure<f64> = Figure::new((3.0, 6.0)).with_dpi(0);
        assert_eq!(no_dpi.dpi(), 1);
        assert_eq!(no_dpi.pixel_size(), (3, 6));
    }

    #[test]
    fn test_view_ranges() {
        let figure = build_figure();
        let axes = &figure.axes()[0];

        let x = axes.view_x_range();
        let y = axes.view_y_range();
        assert!(x.start < -0.5 && x.end > 0.5);

        // Span is just under 2, so the margin is just under 0.1
        assert_close!(y.start, -1.1, tolerance = 1e-3);
        assert_close!(y.end, 1.1, tolerance = 1e-3);
    }

    #[test]
    fn test_fixed_and_degenerate_ranges() {
        let mut figure: Figure<f64> = Figure::new((2.0, 2.0));
        let axes = figure.add_axes();
        assert_eq!(axes.view_x_range(), 0.0..1.0);

        axes.plot([(1.0, 2.0)]);
        assert_eq!(axes.view_x_range(), 0.5..1.5);

        axes.y_range = Some(-3.0..3.0);
        assert_eq!(axes.view_y_range(), -3.0..3.0);
    }

    #[test]
    fn test_hand_built_figure() {
        let mut figure: Figure<f64> = Figure::new((3.0, 6.0)).with_dpi(200);
        let line = figure.add_axes().plot([(0.0, 0.0), (1.0, 1.0)]);
        line.label = Some("diagonal".into());

        let lower = figure.add_axes();
        lower.add_line(Line::new(vec![(0.0, 1.0), (1.0, 0.0)]).with_width(3));
        lower.show_mesh = false;

        assert_eq!(figure.pixel_size(), (600, 1200));
        assert_eq!(figure.axes().len(), 2);
        assert_eq!(figure.line_count(), 2);
        assert_eq!(figure.axes()[0].lines()[0].label.as_deref(), Some("diagonal"));
        assert_eq!(figure.axes()[1].lines()[0].width, 3);

        figure.axes_mut()[1].title = "lower".into();
        assert_eq!(figure.axes()[1].title, "lower");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Figure<f64>>();
        assert_send_sync::<FigureOptions>();
        assert_send_sync::<CurveSamples<f32>>();
    }

    #[test]
    fn test_concurrent_builds() {
        let handles: Vec<_> = (0..4).map(|_| std::thread::spawn(build_figure)).collect();
        let expected = build_figure();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_figure() {
        let figure = build_figure();
        let json = serde_json::to_string(&figure).unwrap();
        let parsed: Figure<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.axes()[0].lines()[0].len(), 100);
        assert_eq!(parsed.size(), figure.size());
    }
}
