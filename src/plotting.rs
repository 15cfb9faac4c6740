//! Rendering figures to images
//!
//! [`render_svg`] and [`save_png`] draw a [`Figure`] with the `plotters`
//! backend. Each axes region of the figure gets an equal share of the canvas
//! height, top to bottom.
//!
//! The [`crate::plot!`] macro saves a figure as a PNG with a generated
//! filename; [`crate::plot_filename!`] generates one without plotting.
//!
//! The [`PlotBackend`] trait can be implemented to draw figures with
//! something other than `plotters`.
use std::path::Path;

use crate::{figure::Figure, value::Value};

mod backend;
pub use backend::*;

mod palette;
pub use palette::{ColorSource, LINE_COLORS};

/// Render a figure to an SVG document
///
/// # Errors
/// Returns an error if the figure cannot be drawn
///
/// # Example
/// ```rust
/// let mut figure = figure_eight::build_figure();
/// figure.axes_mut()[0].show_mesh = false;
///
/// let svg = figure_eight::plotting::render_svg(&figure).unwrap();
/// assert!(svg.contains("<polyline"));
/// ```
pub fn render_svg<T: Value>(figure: &Figure<T>) -> Result<String, backend::plotters::SvgError> {
    let size = figure.pixel_size();
    let mut buffer = String::new();
    {
        let root = backend::plotters::Root::svg(&mut buffer, size)?;
        backend::plotters::draw_figure(&root, figure)?;
    }

    tracing::debug!(
        width = size.0,
        height = size.1,
        axes = figure.axes().len(),
        bytes = buffer.len(),
        "rendered figure to svg"
    );
    Ok(buffer)
}

/// Render a figure to a PNG file at `path`
///
/// # Errors
/// Returns an error if the figure cannot be drawn, or the file cannot be written
pub fn save_png<T: Value>(
    figure: &Figure<T>,
    path: impl AsRef<Path>,
) -> Result<(), backend::plotters::PngError> {
    let path = path.as_ref();
    let size = figure.pixel_size();

    let root = backend::plotters::Root::png(path, size)?;
    backend::plotters::draw_figure(&root, figure)?;

    tracing::debug!(
        width = size.0,
        height = size.1,
        axes = figure.axes().len(),
        path = %path.display(),
        "rendered figure to png"
    );
    Ok(())
}

/// Save a [`Figure`] to a PNG file with a generated name.
///
/// Generates a filename based on the source file and line number; see [`crate::plot_filename!`].
/// - Creates the necessary directories if they don't exist.
/// - Prints the path of the generated file to stdout.
/// - If prefix is specified, it is prepended to the filename.
///
/// Evaluates to `Result<PathBuf, plotting::plotters::PngError>`.
///
/// # Examples
/// ```ignore
/// let figure = figure_eight::build_figure();
/// figure_eight::plot!(figure)?;
/// figure_eight::plot!(figure, prefix = "eight")?;
/// ```
#[macro_export]
macro_rules! plot {
    ($figure:expr $( , prefix = $prefix:expr )?) => {{
        #[allow(unused_mut, unused_assignments)] let mut prefix: Option<String> = None;
        $( prefix = Some($prefix.to_string()); )?
        let path = $crate::plot_filename!(prefix);

        $crate::plotting::save_png(&$figure, &path).map(|()| {
            println!("Wrote plot to {}", path.display());
            path
        })
    }};
}

/// Generate a filename for a plot: `target/plot_output/{file}_line_{line}.png`
///
/// The target directory can be moved with the `TARGET_DIR` environment variable.
///
/// Creates the necessary directories if they don't exist.
///
/// `plot_filename!(Some("prefix"))` will prepend `prefix_` to the filename.
#[macro_export]
macro_rules! plot_filename {
    ($prefix:expr) => {{
        let prefix: Option<String> = $prefix.map(|s| s.to_string());
        let prefix = match prefix {
            Some(p) if !p.is_empty() => format!("{p}_"),
            _ => String::new(),
        };

        let file = file!().replace(['/', '\\'], "_");
        let line = line!();

        let target_dir = ::std::env::var("TARGET_DIR").unwrap_or_else(|_| "target".into());
        let plots_dir = ::std::path::Path::new(&target_dir).join("plot_output");
        let _ = ::std::fs::create_dir_all(&plots_dir);

        let filename = format!("{prefix}{file}_line_{line}.png");

        plots_dir.join(filename)
    }};
}
