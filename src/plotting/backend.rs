use crate::{
    figure::{Axes, Line},
    value::Value,
};

pub mod plotters;

/// Trait for plot backends
///
/// A backend draws one [`Axes`] region onto a root it borrows for `'root`.
pub trait PlotBackend<'root>: Sized {
    /// Error type for the plot backend
    type Error: std::error::Error;

    /// Root type for the plot backend
    type Root: 'root;

    /// Color type for the plot backend
    type Color: Clone;

    /// Create a new plot on the given root, with the title, labels and ranges of `axes`
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    fn new_plot<T: Value>(root: &'root Self::Root, axes: &Axes<T>) -> Result<Self, Self::Error>;

    /// Get the next color in the palette
    fn next_color(&mut self) -> Self::Color;

    /// Add a line to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: Option<&str>,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Finalize the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn finalize(self) -> Result<(), Self::Error>;

    /// Add a line from a figure, in the next palette color
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_element<T: Value>(&mut self, line: &Line<T>) -> Result<(), Self::Error> {
        let color = self.next_color();
        tracing::trace!(points = line.len(), width = line.width, "drawing line");
        self.add_line(line.points(), line.label.as_deref(), line.width, color)
    }

    /// Draw a complete axes region: create the plot, add every line in order, finalize
    ///
    /// # Errors
    /// Returns an error if any step fails.
    fn draw_axes<T: Value>(root: &'root Self::Root, axes: &Axes<T>) -> Result<(), Self::Error> {
        let mut plot = Self::new_plot(root, axes)?;
        for line in axes.lines() {
            plot.add_element(line)?;
        }
        plot.finalize()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::build_figure;

    /// Records every call instead of drawing
    struct Recorder<'root> {
        log: &'root RefCell<Vec<String>>,
        color: usize,
    }
    impl<'root> PlotBackend<'root> for Recorder<'root> {
        type Error = std::fmt::Error;
        type Root = RefCell<Vec<String>>;
        type Color = usize;

        fn new_plot<T: Value>(root: &'root Self::Root, axes: &Axes<T>) -> Result<Self, Self::Error> {
            root.borrow_mut().push(format!("plot '{}'", axes.title));
            Ok(Self {
                log: root,
                color: 0,
            })
        }

        fn next_color(&mut self) -> Self::Color {
            self.color += 1;
            self.color
        }

        fn add_line<T: Value>(
            &mut self,
            data: &[(T, T)],
            label: Option<&str>,
            width: u32,
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(format!(
                "line n={} label={label:?} width={width} color={color}",
                data.len()
            ));
            Ok(())
        }

        fn finalize(self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push("finalize".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_draw_axes_order() {
        let figure = build_figure();
        let log = RefCell::new(Vec::new());
        Recorder::draw_axes(&log, &figure.axes()[0]).unwrap();

        assert_eq!(
            log.into_inner(),
            vec![
                "plot ''".to_string(),
                "line n=100 label=None width=2 color=1".to_string(),
                "finalize".to_string(),
            ]
        );
    }

    #[test]
    fn test_colors_advance_per_line() {
        let mut axes: Axes<f64> = Axes::default();
        axes.title = "two".into();
        axes.plot([(0.0, 0.0), (1.0, 1.0)]);
        axes.add_line(Line::new(vec![(0.0, 1.0), (1.0, 0.0)]).with_label("down"));

        let log = RefCell::new(Vec::new());
        Recorder::draw_axes(&log, &axes).unwrap();

        let log = log.into_inner();
        assert_eq!(log.len(), 4);
        assert_eq!(log[0], "plot 'two'");
        assert!(log[1].ends_with("color=1"));
        assert_eq!(log[2], "line n=2 label=Some(\"down\") width=2 color=2");
    }
}
