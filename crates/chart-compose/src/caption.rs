// File: crates/chart-compose/src/caption.rs
// Summary: Frame and fetch-stats caption lines shown beneath the legend.

use crate::chart::ChartConfig;
use crate::element::Element;
use crate::format::{compact_count, duration, end_time};
use crate::text::{TextAlign, TextLayout};
use crate::theme::FontSpec;

/// Gap between the legend and the captions.
pub const CAPTION_PADDING: u32 = 15;

const CAPTION_LAYOUT: TextLayout = TextLayout::wrapped(FontSpec::SMALL, TextAlign::Left);

/// `Frame: 3h, End: 2024-03-01T12:00 UTC, Step: 1m`
pub fn frame_line(config: &ChartConfig) -> String {
    let frame_ms = (config.end - config.start).num_milliseconds();
    format!(
        "Frame: {}, End: {}, Step: {}",
        duration(frame_ms),
        end_time(config.end, config.timezone),
        duration(config.step_ms),
    )
}

/// One sample per line per step across the closed frame, both ends included.
pub fn graph_datapoints(config: &ChartConfig) -> u64 {
    let lines = config.num_lines() as u64;
    let frame_secs = (config.end.timestamp() - config.start.timestamp()).max(0);
    let step_secs = (config.step_ms / 1000).max(1);
    lines * (frame_secs / step_secs + 1) as u64
}

/// Fetch statistics; `None` when no load time was reported.
pub fn stats_line(config: &ChartConfig) -> Option<String> {
    if config.load_time_ms <= 0 {
        return None;
    }
    let stats = &config.stats;
    if !stats.is_known() {
        return Some(format!("Fetch: {}ms", config.load_time_ms));
    }
    Some(format!(
        "Fetch: {}ms (L: {}, {}, {}; D: {}, {}, {})",
        config.load_time_ms,
        compact_count(stats.input_lines),
        compact_count(stats.output_lines),
        compact_count(config.num_lines() as u64),
        compact_count(stats.input_datapoints),
        compact_count(stats.output_datapoints),
        compact_count(graph_datapoints(config)),
    ))
}

/// Padding, the frame line and the optional stats line.
pub fn build_captions(config: &ChartConfig) -> Vec<Element> {
    let mut parts = vec![
        Element::VerticalPadding(CAPTION_PADDING),
        Element::text(frame_line(config), CAPTION_LAYOUT),
    ];
    if let Some(stats) = stats_line(config) {
        parts.push(Element::text(stats, CAPTION_LAYOUT));
    }
    parts
}
