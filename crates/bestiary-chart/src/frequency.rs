//! Bar and pie charts over frequency tables.

use bestiary_core::FrequencyEntry;
use colored::Colorize;

use crate::{finish, paint};
use crate::style::ChartStyle;

/// Glyphs used to tell pie slices apart.
const SLICE_GLYPHS: [char; 8] = ['█', '▓', '▒', '░', '#', '*', '+', '='];

/// Render a horizontal bar chart, one bar per entry, in entry order.
///
/// The longest bar spans the full style width.
pub fn bar_chart(title: &str, entries: &[FrequencyEntry], style: &ChartStyle) -> String {
    let mut lines = vec![format!("  {}", heading(title, style))];
    if entries.is_empty() {
        lines.push("  (no values)".to_string());
        return finish(lines);
    }

    let label_width = label_width(entries);
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
    for (i, entry) in entries.iter().enumerate() {
        let length = scaled(entry.count, max, style.width());
        let bar: String = std::iter::repeat_n(style.fill(), length).collect();
        lines.push(format!(
            "  {:<label_width$} │{} {}",
            entry.category,
            paint(&bar, i, style),
            entry.count
        ));
    }
    finish(lines)
}

/// Render a pie chart as a proportional strip with a legend.
///
/// Each slice gets its own glyph; the legend lists count and share.
pub fn pie_chart(title: &str, entries: &[FrequencyEntry], style: &ChartStyle) -> String {
    let mut lines = vec![format!("  {}", heading(title, style))];
    let total: usize = entries.iter().map(|e| e.count).sum();
    if total == 0 {
        lines.push("  (no values)".to_string());
        return finish(lines);
    }

    let mut strip = String::new();
    let mut cumulative = 0;
    let mut drawn = 0;
    for (i, entry) in entries.iter().enumerate() {
        cumulative += entry.count;
        let end = scaled(cumulative, total, style.width());
        let slice: String = std::iter::repeat_n(glyph(i), end - drawn).collect();
        strip.push_str(&paint(&slice, i, style));
        drawn = end;
    }
    lines.push(format!("  [{strip}]"));

    let label_width = label_width(entries);
    for (i, entry) in entries.iter().enumerate() {
        let percent = style.number(entry.share(total) * 100.0);
        lines.push(format!(
            "  {} {:<label_width$} {:>6}%  ({})",
            paint(&glyph(i).to_string(), i, style),
            entry.category,
            percent,
            entry.count
        ));
    }
    finish(lines)
}

fn glyph(i: usize) -> char {
    SLICE_GLYPHS[i % SLICE_GLYPHS.len()]
}

fn heading(title: &str, style: &ChartStyle) -> String {
    if style.color() {
        title.bold().to_string()
    } else {
        title.to_string()
    }
}

fn label_width(entries: &[FrequencyEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(0)
}

/// `value / max` of `width` columns, rounded to the nearest column.
fn scaled(value: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (value * width + max / 2) / max
}
