// File: crates/chart-compose/src/chart.rs
// Summary: Per-render chart configuration: plots, time frame, legend mode and upstream stats.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use skia_safe as skia;

use crate::series::Line;

/// Default requested plot width in pixels.
pub const DEFAULT_WIDTH: u32 = 700;
/// Default requested plot height in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendMode {
    Off,
    #[default]
    Labels,
    LabelsWithStats,
}

impl LegendMode {
    pub fn shows_stats(self) -> bool {
        self == LegendMode::LabelsWithStats
    }
}

impl FromStr for LegendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LegendMode::Off),
            "labels" => Ok(LegendMode::Labels),
            "labels-with-stats" | "stats" => Ok(LegendMode::LabelsWithStats),
            other => Err(format!("unknown legend mode '{other}'")),
        }
    }
}

/// One y-axis and the lines plotted against it.
#[derive(Clone, Debug)]
pub struct Plot {
    pub ylabel: Option<String>,
    pub axis_color: skia::Color,
    pub lines: Vec<Line>,
}

impl Plot {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { ylabel: None, axis_color: skia::Color::BLACK, lines }
    }

    pub fn with_ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = Some(label.into());
        self
    }

    pub fn with_axis_color(mut self, color: skia::Color) -> Self {
        self.axis_color = color;
        self
    }

    /// Finite value range across every line of this plot.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .filter_map(Line::value_range)
            .reduce(|(a_lo, a_hi), (b_lo, b_hi)| (a_lo.min(b_lo), a_hi.max(b_hi)))
    }
}

/// Row and datapoint counts reported by the upstream fetch.
/// Treated as unknown while `input_lines` is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataStats {
    pub input_lines: u64,
    pub input_datapoints: u64,
    pub output_lines: u64,
    pub output_datapoints: u64,
}

impl DataStats {
    pub fn is_known(&self) -> bool {
        self.input_lines > 0
    }
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub legend: LegendMode,
    pub plots: Vec<Plot>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: Tz,
    /// Sampling step in milliseconds.
    pub step_ms: i64,
    /// Time spent fetching the data, in milliseconds. Zero hides the fetch caption.
    pub load_time_ms: i64,
    pub stats: DataStats,
    /// Warnings produced while computing the data.
    pub warnings: Vec<String>,
}

impl ChartConfig {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, step_ms: i64) -> Self {
        Self {
            title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: 1.0,
            legend: LegendMode::default(),
            plots: Vec::new(),
            start,
            end,
            timezone: Tz::UTC,
            step_ms,
            load_time_ms: 0,
            stats: DataStats::default(),
            warnings: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_legend(mut self, legend: LegendMode) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.plots.push(plot);
        self
    }

    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = tz;
        self
    }

    pub fn with_load_time(mut self, load_time_ms: i64, stats: DataStats) -> Self {
        self.load_time_ms = load_time_ms;
        self.stats = stats;
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Lines drawn across all plots.
    pub fn num_lines(&self) -> usize {
        self.plots.iter().map(|p| p.lines.len()).sum()
    }
}
