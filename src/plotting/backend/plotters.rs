//! Plotting backend using the `plotters` crate
//!
//! Everything is coerced to `f64` for plotting purposes.
//!
//! Works on any `plotters` drawing backend; [`Root::svg`] and [`Root::png`]
//! cover the two used by [`crate::plotting::render_svg`] and
//! [`crate::plotting::save_png`].
//!
//! Text is only drawn for titles, axis labels, tick labels and legends. An
//! axes with an empty title, `show_mesh: false` and no labelled lines renders
//! without touching any font.
use std::{ops::Range, path::Path};

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
};

use crate::{
    figure::{Axes, Figure},
    plotting::{palette::LINE_COLORS, ColorSource, PlotBackend},
    value::{CoordExt, Value},
};

const MAX_LBL_WIDTH: usize = 120;

/// Error returned when rendering to an SVG string
pub type SvgError = Error<<SVGBackend<'static> as DrawingBackend>::ErrorType>;

/// Error returned when rendering to a PNG file
pub type PngError = Error<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

/// Draw every axes of a figure onto the given root, stacked top to bottom
///
/// # Errors
/// Returns an error if any axes could not be drawn, or the root could not be presented
pub fn draw_figure<DB, T>(root: &Root<DB>, figure: &Figure<T>) -> Result<(), Error<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    T: Value,
{
    let regions = root.split(figure.axes().len());
    for (region, axes) in regions.iter().zip(figure.axes()) {
        Backend::<DB>::draw_axes(region, axes)?;
    }

    root.present()
}

/// A drawing area root for plotters
pub struct Root<DB: DrawingBackend>(DrawingArea<DB, Shift>);
impl<DB: DrawingBackend> AsRef<DrawingArea<DB, Shift>> for Root<DB> {
    fn as_ref(&self) -> &DrawingArea<DB, Shift> {
        &self.0
    }
}
impl<DB> Root<DB>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    /// Wrap a plotters backend, filling the canvas white
    ///
    /// # Errors
    /// Returns an error if the canvas could not be filled
    pub fn from_backend(backend: DB) -> Result<Self, Error<DB::ErrorType>> {
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&WHITE)?;
        Ok(Self(root))
    }

    /// Split the area into `pieces` regions of equal height, top to bottom
    ///
    /// Always returns at least one region.
    #[must_use]
    pub fn split(&self, pieces: usize) -> Vec<Self> {
        self.0
            .split_evenly((pieces.max(1), 1))
            .into_iter()
            .map(Self)
            .collect()
    }

    /// Flush everything drawn so far to the output
    ///
    /// # Errors
    /// Returns an error if the backend could not write its output
    pub fn present(&self) -> Result<(), Error<DB::ErrorType>> {
        self.0.present()?;
        Ok(())
    }
}
impl<'a> Root<SVGBackend<'a>> {
    /// Create a root that writes an SVG document into `buffer`
    ///
    /// The document is complete once the root is dropped.
    ///
    /// # Errors
    /// Returns an error if the canvas could not be filled
    pub fn svg(buffer: &'a mut String, size: (u32, u32)) -> Result<Self, SvgError> {
        Self::from_backend(SVGBackend::with_string(buffer, size))
    }
}
impl<'a> Root<BitMapBackend<'a>> {
    /// Create a root that writes a PNG file at `path`
    ///
    /// # Errors
    /// Returns an error if the canvas could not be filled
    pub fn png(path: &'a Path, size: (u32, u32)) -> Result<Self, PngError> {
        Self::from_backend(BitMapBackend::new(path, size))
    }
}

/// Plotters backend for plotting
pub struct Backend<'root, DB: DrawingBackend + 'root> {
    context: ChartContext<'root, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    palette: ColorSource<RGBAColor>,

    x_label: Option<String>,
    y_label: Option<String>,

    show_mesh: bool,
    show_legend: bool,
    x_axis_labels: Option<usize>,
    y_axis_labels: Option<usize>,
}
impl<'root, DB> PlotBackend<'root> for Backend<'root, DB>
where
    DB: DrawingBackend + 'root,
    DB::ErrorType: 'static,
{
    type Error = Error<DB::ErrorType>;
    type Color = RGBAColor;
    type Root = Root<DB>;

    fn next_color(&mut self) -> Self::Color {
        self.palette.next_color().unwrap_or_else(|| BLACK.into())
    }

    fn new_plot<T: Value>(root: &'root Self::Root, axes: &Axes<T>) -> Result<Self, Self::Error> {
        //
        // T(Range) -> f64(Range)
        let x_range = axes.view_x_range();
        let y_range = axes.view_y_range();
        let x_range: Range<f64> =
            cast::<DB::ErrorType, _>(x_range.start)?..cast::<DB::ErrorType, _>(x_range.end)?;
        let y_range: Range<f64> =
            cast::<DB::ErrorType, _>(y_range.start)?..cast::<DB::ErrorType, _>(y_range.end)?;

        let mut context = ChartBuilder::on(root.as_ref());
        context
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(50);

        if !axes.title.is_empty() {
            context.caption(&axes.title, (FontFamily::SansSerif, 16).into_font());
        }

        if !axes.show_mesh || axes.x_axis_labels == Some(0) {
            context.x_label_area_size(0);
        }

        if !axes.show_mesh || axes.y_axis_labels == Some(0) {
            context.y_label_area_size(0);
        }

        let context = context.build_cartesian_2d(x_range, y_range)?;

        let palette = ColorSource::new(
            LINE_COLORS
                .iter()
                .map(|&(r, g, b)| RGBColor(r, g, b).into())
                .collect(),
        );

        Ok(Self {
            context,
            palette,

            x_label: axes.x_label.clone(),
            y_label: axes.y_label.clone(),

            show_mesh: axes.show_mesh,
            show_legend: false,
            x_axis_labels: axes.x_axis_labels,
            y_axis_labels: axes.y_axis_labels,
        })
    }

    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: Option<&str>,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let data = data
            .as_f64()
            .map_err(|_| Error::<DB::ErrorType>::Cast)?;

        let style = ShapeStyle::from(color).stroke_width(width);
        let series = self.context.draw_series(LineSeries::new(data, style))?;

        if let Some(label) = label {
            series
                .label(shorten(label))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            self.show_legend = true;
        }

        Ok(())
    }

    fn finalize(mut self) -> Result<(), Self::Error> {
        if self.show_mesh {
            //
            // Mesh and axes
            let mut mesh = self.context.configure_mesh();
            mesh.label_style((FontFamily::SansSerif, 12))
                .x_label_formatter(&format_tick)
                .y_label_formatter(&format_tick);

            if let Some(x_label) = &self.x_label {
                mesh.x_desc(x_label);
            }

            if let Some(y_label) = &self.y_label {
                mesh.y_desc(y_label);
            }

            if let Some(x_labels) = self.x_axis_labels {
                mesh.x_labels(x_labels);
            }

            if let Some(y_labels) = self.y_axis_labels {
                mesh.y_labels(y_labels);
            }

            mesh.draw()?;
        }

        if self.show_legend {
            //
            // Legend
            self.context
                .configure_series_labels()
                .label_font((FontFamily::SansSerif, 10))
                .background_style(WHITE.mix(0.5))
                .border_style(BLACK)
                .position(SeriesLabelPosition::LowerRight)
                .draw()?;
        }

        self.context.plotting_area().present()?;
        Ok(())
    }
}

fn format_tick(v: &f64) -> String {
    if *v == 0.0 || (1e-3..1e3).contains(&v.abs()) {
        format!("{v:.2}")
    } else {
        format!("{v:.2e}")
    }
}

//
// Shorten label and add [...] if too long
fn shorten(label: &str) -> String {
    if label.chars().count() > MAX_LBL_WIDTH {
        let mut s: String = label.chars().take(MAX_LBL_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        label.to_string()
    }
}

fn cast<E, T>(value: T) -> Result<f64, Error<E>>
where
    E: std::error::Error + Send + Sync + 'static,
    T: Value,
{
    num_traits::cast(value).ok_or(Error::Cast)
}

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum Error<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Error drawing the plot
    #[error("Error drawing plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<E>),

    /// Error casting a value
    #[error("A value could not be represented as f64")]
    Cast,
}
