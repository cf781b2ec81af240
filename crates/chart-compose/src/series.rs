// File: crates/chart-compose/src/series.rs
// Summary: Line model: sampled values plus the summary statistics shown in the legend.
// Notes:
// - Values are one sample per step starting at the chart start time; NaN marks a gap.
// - Statistics normally arrive precomputed; `with_values` derives them for callers
//   that only have raw samples.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub last: f64,
    pub total: f64,
}

impl SummaryStats {
    pub const EMPTY: SummaryStats = SummaryStats {
        count: 0,
        min: f64::NAN,
        max: f64::NAN,
        avg: f64::NAN,
        last: f64::NAN,
        total: f64::NAN,
    };

    /// Statistics over the non-NaN samples.
    pub fn from_values(values: &[f64]) -> Self {
        let mut stats = Self::EMPTY;
        let mut total = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| !v.is_nan()) {
            stats.count += 1;
            total += v;
            min = min.min(v);
            max = max.max(v);
            stats.last = v;
        }
        if stats.count > 0 {
            stats.min = min;
            stats.max = max;
            stats.total = total;
            stats.avg = total / stats.count as f64;
        }
        stats
    }
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[derive(Clone, Debug)]
pub struct Line {
    pub label: String,
    pub color: skia::Color,
    pub values: Vec<f64>,
    pub stats: SummaryStats,
}

impl Line {
    pub fn new(label: impl Into<String>, color: skia::Color) -> Self {
        Self { label: label.into(), color, values: Vec::new(), stats: SummaryStats::EMPTY }
    }

    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.stats = SummaryStats::from_values(&values);
        self.values = values;
        self
    }

    pub fn with_stats(mut self, stats: SummaryStats) -> Self {
        self.stats = stats;
        self
    }

    /// Finite (min, max) over the samples, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
