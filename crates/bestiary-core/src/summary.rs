//! Descriptive statistics over a series, for box and violin charts.

use serde::Serialize;

/// Five-number summary plus count and mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

impl Summary {
    /// Summarize a series. Returns `None` when it is empty.
    ///
    /// Quartiles interpolate linearly between the closest ranks.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        Some(Self {
            count,
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[count - 1],
            mean,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Quantile of an already sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Equal-width bin counts over a fixed range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub lo: f64,
    /// Upper edge of the last bin (inclusive).
    pub hi: f64,
    /// Count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `lo..=hi`.
    ///
    /// Values outside the range are ignored. A zero-width range puts every
    /// matching value into the first bin.
    pub fn of(values: &[f64], lo: f64, hi: f64, bins: usize) -> Self {
        let bins = bins.max(1);
        let mut counts = vec![0; bins];
        let width = (hi - lo) / bins as f64;
        for &v in values {
            if v < lo || v > hi {
                continue;
            }
            let bin = if width > 0.0 {
                (((v - lo) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[bin] += 1;
        }
        Self { lo, hi, counts }
    }

    /// The largest bin count.
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(Summary::of(&[]).is_none());
    }

    #[test]
    fn quartiles_interpolate() {
        let s = Summary::of(&[7.0, 1.0, 3.0, 5.0]).unwrap();
        assert_eq!(s.count, 4);
        assert!(close(s.min, 1.0));
        assert!(close(s.q1, 2.5));
        assert!(close(s.median, 4.0));
        assert!(close(s.q3, 5.5));
        assert!(close(s.max, 7.0));
        assert!(close(s.mean, 4.0));
        assert!(close(s.iqr(), 3.0));
    }

    #[test]
    fn single_value_summary() {
        let s = Summary::of(&[42.0]).unwrap();
        assert!(close(s.min, 42.0));
        assert!(close(s.median, 42.0));
        assert!(close(s.max, 42.0));
    }

    #[test]
    fn histogram_bins_inclusive_upper_edge() {
        let h = Histogram::of(&[0.0, 1.0, 5.0, 9.9, 10.0], 0.0, 10.0, 2);
        assert_eq!(h.counts, vec![2, 3]);
        assert_eq!(h.peak(), 3);
    }

    #[test]
    fn histogram_zero_width_range() {
        let h = Histogram::of(&[3.0, 3.0], 3.0, 3.0, 4);
        assert_eq!(h.counts, vec![2, 0, 0, 0]);
    }
}
