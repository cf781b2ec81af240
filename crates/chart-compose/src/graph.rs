// File: crates/chart-compose/src/graph.rs
// Summary: Graph body element: frame, grid, one value axis per plot, time labels and line paths.
// Notes:
// - Its width (plot area plus axis gutters) is the shared width of the whole page.
// - Height does not depend on the width it is measured at.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use skia_safe as skia;

use crate::chart::{ChartConfig, Plot};
use crate::element::DrawContext;
use crate::format;
use crate::geometry::RectI32;
use crate::scale::{linspace, TimeScale, ValueScale};

/// Space for the tick labels of each value axis.
pub const AXIS_GUTTER: u32 = 60;
/// Right margin when there is no secondary axis.
pub const RIGHT_MARGIN: u32 = 15;
pub const TOP_MARGIN: u32 = 10;
/// Space for the time labels under the plot area.
pub const TIME_AXIS_HEIGHT: u32 = 25;

const VALUE_TICKS: usize = 5;
const TIME_TICKS: usize = 5;
const LABEL_SIZE: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct GraphBody {
    pub plots: Vec<Plot>,
    pub plot_width: u32,
    pub plot_height: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: Tz,
    pub step_ms: i64,
}

impl GraphBody {
    /// `plot_width`/`plot_height` are the already clamped plot area size.
    pub fn new(config: &ChartConfig, plot_width: u32, plot_height: u32) -> Self {
        Self {
            plots: config.plots.clone(),
            plot_width,
            plot_height,
            start: config.start,
            end: config.end,
            timezone: config.timezone,
            step_ms: config.step_ms,
        }
    }

    fn right_gutter(&self) -> u32 {
        match self.plots.len() {
            0 | 1 => RIGHT_MARGIN,
            n => AXIS_GUTTER.saturating_mul(u32::try_from(n - 1).unwrap_or(u32::MAX)),
        }
    }

    pub fn width(&self) -> u32 {
        AXIS_GUTTER.saturating_add(self.plot_width).saturating_add(self.right_gutter())
    }

    pub fn height(&self) -> u32 {
        TOP_MARGIN.saturating_add(self.plot_height).saturating_add(TIME_AXIS_HEIGHT)
    }

    fn plot_area(&self, band: RectI32) -> RectI32 {
        let left = band.left + AXIS_GUTTER as i32;
        let top = band.top + TOP_MARGIN as i32;
        RectI32::from_ltrb(left, top, left + self.plot_width as i32, top + self.plot_height as i32)
    }

    pub(crate) fn draw(&self, ctx: &DrawContext, canvas: &skia::Canvas, band: RectI32) {
        let area = self.plot_area(band);

        let mut bg = ctx.hints().shape_paint(ctx.theme.graph_background);
        bg.set_style(skia::paint::Style::Fill);
        canvas.draw_rect(area.to_rect(), &bg);

        draw_grid(ctx, canvas, area);

        let frame_ms = (self.end - self.start).num_milliseconds();
        let time_scale = TimeScale::new(area.left as f32, area.right as f32, frame_ms, self.step_ms);
        for (i, plot) in self.plots.iter().enumerate() {
            let scale = ValueScale::new_linear(area.top as f32, area.bottom as f32, plot.value_range());
            let axis_x = if i == 0 { area.left } else { area.right + (AXIS_GUTTER * (i as u32 - 1)) as i32 };
            draw_value_axis(ctx, canvas, axis_x, area, &scale, plot.axis_color, i == 0);
            for line in &plot.lines {
                draw_line_series(ctx, canvas, &time_scale, &scale, &line.values, line.color);
            }
        }

        self.draw_time_axis(ctx, canvas, area, frame_ms);

        let mut frame = ctx.hints().shape_paint(ctx.theme.axis_line);
        frame.set_style(skia::paint::Style::Stroke);
        frame.set_stroke_width(1.0);
        canvas.draw_rect(area.to_rect(), &frame);
    }

    fn draw_time_axis(&self, ctx: &DrawContext, canvas: &skia::Canvas, area: RectI32, frame_ms: i64) {
        let font = ctx.shaper.label_font(LABEL_SIZE);
        let label_paint = ctx.hints().text_paint(ctx.theme.axis_label);
        let tick_paint = ctx.hints().shape_paint(ctx.theme.axis_line);
        let baseline = area.bottom as f32 + 4.0 + LABEL_SIZE;
        for frac in linspace(0.0, 1.0, TIME_TICKS) {
            let x = area.left as f32 + frac as f32 * area.width() as f32;
            canvas.draw_line((x, area.bottom as f32), (x, area.bottom as f32 + 3.0), &tick_paint);
            let at = self.start + Duration::milliseconds((frac * frame_ms as f64) as i64);
            let label = format::time_label(at, self.timezone);
            let (w, _) = font.measure_str(&label, None);
            canvas.draw_str(&label, (x - w * 0.5, baseline), &font, &label_paint);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(ctx: &DrawContext, canvas: &skia::Canvas, area: RectI32) {
    let mut paint = ctx.hints().shape_paint(ctx.theme.grid);
    paint.set_stroke_width(1.0);
    let (l, t, r, b) = (area.left as f64, area.top as f64, area.right as f64, area.bottom as f64);

    // verticals
    for x in linspace(l, r, TIME_TICKS) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t, b, VALUE_TICKS) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_value_axis(
    ctx: &DrawContext,
    canvas: &skia::Canvas,
    x: i32,
    area: RectI32,
    scale: &ValueScale,
    color: skia::Color,
    labels_left: bool,
) {
    let mut axis_paint = ctx.hints().shape_paint(color);
    axis_paint.set_stroke_width(1.5);
    let x = x as f32;
    canvas.draw_line((x, area.top as f32), (x, area.bottom as f32), &axis_paint);

    let font = ctx.shaper.label_font(LABEL_SIZE);
    let label_paint = ctx.hints().text_paint(color);
    for v in scale.ticks(VALUE_TICKS) {
        let y = scale.to_px(v);
        let label = format::compact_value(v);
        let (w, _) = font.measure_str(&label, None);
        let (tick_end, text_x) = if labels_left { (x - 3.0, x - 5.0 - w) } else { (x + 3.0, x + 5.0) };
        canvas.draw_line((x, y), (tick_end, y), &axis_paint);
        canvas.draw_str(&label, (text_x, y + LABEL_SIZE * 0.35), &font, &label_paint);
    }
}

/// Polyline through the samples; NaN samples break the path.
fn draw_line_series(
    ctx: &DrawContext,
    canvas: &skia::Canvas,
    time_scale: &TimeScale,
    scale: &ValueScale,
    values: &[f64],
    color: skia::Color,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut segments = 0usize;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (time_scale.to_px(i), scale.to_px(v));
        if pen_down {
            path.line_to(p);
            segments += 1;
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    if segments == 0 {
        return;
    }

    let mut stroke = ctx.hints().shape_paint(color);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    canvas.draw_path(&path, &stroke);
}
