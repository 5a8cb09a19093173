//! Box and violin charts over grouped numeric series.
//!
//! Every category of one numeric column is drawn against the same axis,
//! so rows can be compared by eye.

use bestiary_core::{GroupedSeries, Histogram, Summary};

use crate::{finish, paint};
use crate::style::ChartStyle;

/// Density glyphs from empty to full.
const DENSITY: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render one box plot row per category.
///
/// `├` and `┤` mark the extremes, `[` and `]` the quartiles, `|` the
/// median.
pub fn box_chart(grouped: &GroupedSeries, style: &ChartStyle) -> String {
    let mut lines = vec![format!("  {}", grouped.column)];
    let Some((lo, hi)) = grouped.bounds() else {
        lines.push("  (no values)".to_string());
        return finish(lines);
    };

    let axis = Axis::new(lo, hi, style.width());
    let label_width = label_width(grouped);
    for (i, series) in grouped.series.iter().enumerate() {
        let Some(summary) = Summary::of(&series.values) else {
            continue;
        };
        let row = box_row(&summary, &axis);
        lines.push(format!(
            "  {:<label_width$} │{}│ n={} median={}",
            series.category,
            paint(&row, i, style),
            summary.count,
            style.number(summary.median)
        ));
    }
    lines.push(format!("  {:<label_width$}  {}", "", axis.footer(style)));
    finish(lines)
}

/// Render one density strip per category, binned over the shared axis.
pub fn violin_chart(grouped: &GroupedSeries, style: &ChartStyle) -> String {
    let mut lines = vec![format!("  {}", grouped.column)];
    let Some((lo, hi)) = grouped.bounds() else {
        lines.push("  (no values)".to_string());
        return finish(lines);
    };

    let axis = Axis::new(lo, hi, style.width());
    let label_width = label_width(grouped);
    for (i, series) in grouped.series.iter().enumerate() {
        let histogram = Histogram::of(&series.values, lo, hi, style.bins());
        let strip = density_strip(&histogram, style.width());
        lines.push(format!(
            "  {:<label_width$} │{}│ n={}",
            series.category,
            paint(&strip, i, style),
            series.values.len()
        ));
    }
    lines.push(format!("  {:<label_width$}  {}", "", axis.footer(style)));
    finish(lines)
}

fn label_width(grouped: &GroupedSeries) -> usize {
    grouped
        .series
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0)
}

/// Maps values onto `width` character columns.
struct Axis {
    lo: f64,
    hi: f64,
    width: usize,
}

impl Axis {
    fn new(lo: f64, hi: f64, width: usize) -> Self {
        Self { lo, hi, width }
    }

    fn column(&self, value: f64) -> usize {
        if self.hi <= self.lo {
            return 0;
        }
        let fraction = ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        (fraction * (self.width - 1) as f64).round() as usize
    }

    fn footer(&self, style: &ChartStyle) -> String {
        let lo = style.number(self.lo);
        let hi = style.number(self.hi);
        let gap = (self.width + 2).saturating_sub(lo.chars().count() + hi.chars().count());
        format!("{lo}{}{hi}", " ".repeat(gap.max(1)))
    }
}

fn box_row(summary: &Summary, axis: &Axis) -> String {
    let mut cells = vec![' '; axis.width];
    let (min, q1, median, q3, max) = (
        axis.column(summary.min),
        axis.column(summary.q1),
        axis.column(summary.median),
        axis.column(summary.q3),
        axis.column(summary.max),
    );
    for cell in &mut cells[min..=max] {
        *cell = '─';
    }
    for cell in &mut cells[q1..=q3] {
        *cell = '=';
    }
    cells[min] = '├';
    cells[max] = '┤';
    cells[q1] = '[';
    cells[q3] = ']';
    cells[median] = '|';
    cells.into_iter().collect()
}

fn density_strip(histogram: &Histogram, width: usize) -> String {
    let peak = histogram.peak();
    let bins = histogram.counts.len();
    (0..width)
        .map(|column| {
            let count = histogram.counts[column * bins / width];
            if peak == 0 || count == 0 {
                DENSITY[0]
            } else {
                // Any non-empty bin shows at least the lowest glyph.
                let level = (count * (DENSITY.len() - 1)).div_ceil(peak);
                DENSITY[level.clamp(1, DENSITY.len() - 1)]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use bestiary_core::CategorySeries;

    use super::*;

    fn hp() -> GroupedSeries {
        GroupedSeries {
            column: "hp".into(),
            series: vec![
                CategorySeries::new("Large", vec![0.0, 10.0, 20.0, 30.0, 40.0]),
                CategorySeries::new("Small", vec![5.0]),
            ],
        }
    }

    #[test]
    fn box_row_marks_quartiles() {
        let style = ChartStyle::default().with_width(41);
        let chart = box_chart(&hp(), &style);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "  hp");

        // 41 columns over 0..40: one column per unit
        let large = lines[1];
        assert!(large.starts_with("  Large │├"));
        assert!(large.contains("─[=========|=========]─"));
        assert!(large.ends_with("┤│ n=5 median=20.0"));
    }

    #[test]
    fn single_value_collapses_to_median() {
        let style = ChartStyle::default().with_width(41);
        let chart = box_chart(&hp(), &style);
        let small = chart.lines().nth(2).unwrap();
        assert!(small.contains('|'));
        assert!(!small.contains('['));
        assert!(small.ends_with("n=1 median=5.0"));
    }

    #[test]
    fn footer_shows_axis_range() {
        let chart = box_chart(&hp(), &ChartStyle::default());
        let footer = chart.lines().last().unwrap();
        assert!(footer.trim_start().starts_with("0.0"));
        assert!(footer.ends_with("40.0"));
    }

    #[test]
    fn empty_group_renders_placeholder() {
        let grouped = GroupedSeries {
            column: "speed".into(),
            series: Vec::new(),
        };
        assert!(box_chart(&grouped, &ChartStyle::default()).contains("(no values)"));
        assert!(violin_chart(&grouped, &ChartStyle::default()).contains("(no values)"));
    }

    #[test]
    fn violin_rows_have_style_width() {
        let style = ChartStyle::default().with_width(24).with_bins(4);
        let chart = violin_chart(&hp(), &style);
        for line in chart.lines().skip(1).take(2) {
            let body: String = line
                .split('│')
                .nth(1)
                .unwrap()
                .to_string();
            assert_eq!(body.chars().count(), 24);
        }
        assert!(chart.contains("n=5"));
    }

    #[test]
    fn density_peak_is_full_block() {
        let histogram = Histogram {
            lo: 0.0,
            hi: 1.0,
            counts: vec![4, 0, 1],
        };
        let strip = density_strip(&histogram, 3);
        assert_eq!(strip, "█ ▂");
    }
}
