//! Text charts for Bestiary.
//!
//! Renders the plain data produced by `bestiary-core` as terminal charts:
//! bar and pie charts from frequency entries, box and violin charts from
//! grouped series. Every call takes an explicit [`ChartStyle`] and returns
//! a `String`; nothing is printed and no global state is touched.

/// Box and violin charts.
pub mod distribution;
/// Bar and pie charts.
pub mod frequency;
/// Chart styling.
pub mod style;

/// Re-export chart renderers.
pub use distribution::{box_chart, violin_chart};
/// Re-export chart renderers.
pub use frequency::{bar_chart, pie_chart};
/// Re-export style.
pub use style::ChartStyle;

use colored::{Color, Colorize};

/// Colors cycled through series and slices.
const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Color `text` with the palette entry for `index`, if the style allows it.
fn paint(text: &str, index: usize, style: &ChartStyle) -> String {
    if style.color() {
        text.color(PALETTE[index % PALETTE.len()]).to_string()
    } else {
        text.to_string()
    }
}

/// Join rendered lines, each terminated by a newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_terminates_every_line() {
        assert_eq!(finish(vec!["  a".into(), "  b".into()]), "  a\n  b\n");
    }

    #[test]
    fn paint_is_plain_without_color() {
        let style = ChartStyle::default();
        assert_eq!(paint("██", 3, &style), "██");
    }
}
