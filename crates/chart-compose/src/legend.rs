// File: crates/chart-compose/src/legend.rs
// Summary: Legend entries and the builder turning plots into the legend section.
// Notes:
// - One plot: padding + entry per line, no header.
// - Several plots: per plot a bold "Axis {i}" header in the axis color, then its entries.
// - Plots and lines keep their input order.

use skia_safe as skia;

use crate::chart::{LegendMode, Plot};
use crate::element::{DrawContext, Element, Text};
use crate::format::compact_value;
use crate::geometry::RectI32;
use crate::series::{Line, SummaryStats};
use crate::text::{TextAlign, TextLayout};
use crate::theme::FontSpec;

pub const HEADER_PADDING: u32 = 5;
pub const ENTRY_PADDING: u32 = 2;
/// Edge length of the color swatch.
pub const SWATCH: u32 = 10;
const SWATCH_GAP: u32 = 6;

const LABEL_LAYOUT: TextLayout = TextLayout::wrapped(FontSpec::NORMAL, TextAlign::Left);
const STATS_LAYOUT: TextLayout = TextLayout::wrapped(FontSpec::SMALL, TextAlign::Left);

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    /// Present only when the legend shows statistics.
    pub stats: Option<SummaryStats>,
    label_height: Option<u32>,
}

impl LegendEntry {
    pub fn new(line: &Line, show_stats: bool) -> Self {
        Self {
            label: line.label.clone(),
            color: line.color,
            stats: show_stats.then_some(line.stats),
            label_height: None,
        }
    }

    /// Label row height recorded by the last `layout`.
    pub fn measured_label_height(&self) -> Option<u32> {
        self.label_height
    }

    pub fn stats_text(&self) -> Option<String> {
        self.stats.map(|s| {
            format!(
                "Max: {}  Min: {}  Avg: {}  Last: {}  Total: {}  Count: {}",
                compact_value(s.max),
                compact_value(s.min),
                compact_value(s.avg),
                compact_value(s.last),
                compact_value(s.total),
                s.count,
            )
        })
    }

    fn text_width(width: u32) -> u32 {
        width.saturating_sub(SWATCH + SWATCH_GAP)
    }

    fn label_row_height(&self, ctx: &DrawContext, text_width: u32) -> u32 {
        ctx.shaper.measure_height(&self.label, LABEL_LAYOUT, text_width).max(SWATCH)
    }

    fn stats_row_height(&self, ctx: &DrawContext, text_width: u32) -> u32 {
        self.stats_text()
            .map_or(0, |s| ctx.shaper.measure_height(&s, STATS_LAYOUT, text_width))
    }

    pub(crate) fn measure_height(&self, ctx: &DrawContext, width: u32) -> u32 {
        let w = Self::text_width(width);
        self.label_row_height(ctx, w) + self.stats_row_height(ctx, w)
    }

    pub(crate) fn layout(&mut self, ctx: &DrawContext, width: u32) -> u32 {
        let w = Self::text_width(width);
        let label = self.label_row_height(ctx, w);
        self.label_height = Some(label);
        label + self.stats_row_height(ctx, w)
    }

    pub(crate) fn draw(&self, ctx: &DrawContext, canvas: &skia::Canvas, band: RectI32) {
        let text_w = Self::text_width(band.width().max(0) as u32);
        let label_h = match self.label_height {
            Some(h) => h,
            None => self.label_row_height(ctx, text_w),
        };

        let swatch_top = band.top as f32 + (label_h - SWATCH) as f32 * 0.5;
        let swatch = skia::Rect::from_xywh(band.left as f32, swatch_top, SWATCH as f32, SWATCH as f32);
        let mut fill = ctx.hints().shape_paint(self.color);
        fill.set_style(skia::paint::Style::Fill);
        canvas.draw_rect(swatch, &fill);
        let mut border = ctx.hints().shape_paint(ctx.theme.swatch_border);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        canvas.draw_rect(swatch, &border);

        let x = (band.left + (SWATCH + SWATCH_GAP) as i32) as f32;
        let fg = ctx.theme.foreground;
        ctx.shaper.draw(canvas, &self.label, LABEL_LAYOUT, fg, x, band.top as f32, text_w as f32);
        if let Some(stats) = self.stats_text() {
            let y = (band.top + label_h as i32) as f32;
            ctx.shaper.draw(canvas, &stats, STATS_LAYOUT, fg, x, y, text_w as f32);
        }
    }
}

/// Header text for the plot at `index` in a multi-axis legend.
pub fn axis_header(index: usize, plot: &Plot) -> String {
    match &plot.ylabel {
        Some(label) => format!("Axis {index}: {label}"),
        None => format!("Axis {index}"),
    }
}

fn entries(plot: &Plot, show_stats: bool) -> impl Iterator<Item = Element> + '_ {
    plot.lines.iter().flat_map(move |line| {
        [
            Element::VerticalPadding(ENTRY_PADDING),
            Element::LegendEntry(LegendEntry::new(line, show_stats)),
        ]
    })
}

/// Legend section for `plots`. Empty when the legend is off.
pub fn build_legend(plots: &[Plot], mode: LegendMode) -> Vec<Element> {
    if mode == LegendMode::Off {
        return Vec::new();
    }
    let show_stats = mode.shows_stats();
    let mut parts = Vec::new();
    if plots.len() > 1 {
        for (i, plot) in plots.iter().enumerate() {
            let header = Text::new(axis_header(i, plot), TextLayout::wrapped(FontSpec::NORMAL.bold(), TextAlign::Left))
                .with_color(plot.axis_color);
            parts.push(Element::VerticalPadding(HEADER_PADDING));
            parts.push(Element::Text(header));
            parts.extend(entries(plot, show_stats));
        }
    } else if let Some(plot) = plots.first() {
        parts.extend(entries(plot, show_stats));
    }
    parts
}
