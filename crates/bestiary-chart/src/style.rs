//! Chart styling.

/// Narrowest chart body, in terminal columns.
pub const MIN_WIDTH: usize = 10;
/// Widest chart body, in terminal columns.
pub const MAX_WIDTH: usize = 200;

/// Presentation settings for every chart.
///
/// A style is a plain value handed to each render call; nothing is read
/// from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    width: usize,
    fill: char,
    precision: usize,
    color: bool,
    bins: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 40,
            fill: '█',
            precision: 1,
            color: false,
            bins: 12,
        }
    }
}

impl ChartStyle {
    /// Set the chart body width (clamped to 10-200).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        self
    }

    /// Set the character used to draw bars.
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Set the number of decimals shown for values and percentages.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(6);
        self
    }

    /// Enable or disable ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the number of bins used by violin charts (clamped to 2-50).
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins.clamp(2, 50);
        self
    }

    /// Chart body width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bar fill character.
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Decimal places for numbers.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Whether output is colored.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Violin bin count.
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Format a number with this style's precision.
    pub fn number(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }
}
