/// Cycles through a fixed list of colors
#[derive(Debug, Clone)]
pub struct ColorSource<C: Clone> {
    colors: Vec<C>,
    index: usize,
}
impl<C: Clone> ColorSource<C> {
    /// Creates a source that starts at the first color
    #[must_use]
    pub fn new(colors: Vec<C>) -> Self {
        Self { colors, index: 0 }
    }

    /// Returns the next color, wrapping around at the end
    ///
    /// Returns `None` only if the source holds no colors.
    pub fn next_color(&mut self) -> Option<C> {
        let color = self.colors.get(self.index)?.clone();
        self.index = (self.index + 1) % self.colors.len();
        Some(color)
    }
}

/// The 10-color qualitative palette lines are drawn with, in order
pub const LINE_COLORS: [(u8, u8, u8); 10] = [
    (31, 119, 180),  // blue
    (255, 127, 14),  // orange
    (44, 160, 44),   // green
    (214, 39, 40),   // red
    (148, 103, 189), // purple
    (140, 86, 75),   // brown
    (227, 119, 194), // pink
    (127, 127, 127), // grey
    (188, 189, 34),  // olive
    (23, 190, 207),  // cyan
];
