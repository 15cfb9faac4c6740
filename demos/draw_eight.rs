//!
//! Draws the figure-eight to `target/plot_output`, once as the default 3x6 figure
//! and once as a wider, denser, titled one.
//!
//! Run with `RUST_LOG=debug` to see what gets built and rendered.
//!
use figure_eight::{build_figure, build_figure_with, plot, FigureOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let figure = build_figure();
    plot!(figure, prefix = "eight")?;

    let mut detailed = build_figure_with::<f64>(&FigureOptions {
        samples: 400,
        size: (4.0, 6.0),
        title: "x = sin(2t)/2, y = cos(t)".to_string(),
        ..Default::default()
    })?;
    let axes = &mut detailed.axes_mut()[0];
    axes.x_label = Some("x".to_string());
    axes.y_label = Some("y".to_string());
    plot!(detailed, prefix = "eight_detailed")?;

    let svg = detailed.render_svg()?;
    println!("SVG document is {} bytes", svg.len());

    Ok(())
}
