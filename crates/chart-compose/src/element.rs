// File: crates/chart-compose/src/element.rs
// Summary: The element contract shared by every block of the chart page, and the simple variants.
// Notes:
// - `measure_height` is pure: the same element at the same width always reports
//   the same height, so the layout can measure once and paint with those values.
// - `layout` measures and also records the heights nested parts paint with.
// - `draw` clips to the band it is given before delegating to the variant.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::graph::GraphBody;
use crate::hints::RenderingHintSet;
use crate::legend::LegendEntry;
use crate::text::{TextLayout, TextShaper};
use crate::theme::Theme;

/// Horizontal space reserved for the bullet of a list item.
pub const LIST_INDENT: u32 = 16;
/// Inner margin of a block, on every side.
pub const BLOCK_PADDING: u32 = 5;

/// Shared, read-only state for measuring and painting one render.
pub struct DrawContext {
    pub shaper: TextShaper,
    pub theme: Theme,
}

impl DrawContext {
    pub fn new(hints: RenderingHintSet) -> Self {
        Self { shaper: TextShaper::new(hints), theme: Theme::standard() }
    }

    pub fn hints(&self) -> &RenderingHintSet {
        self.shaper.hints()
    }
}

#[derive(Clone, Debug)]
pub enum Element {
    Text(Text),
    VerticalPadding(u32),
    GraphBody(GraphBody),
    LegendEntry(LegendEntry),
    ListItem(Box<Element>),
    Block(Block),
}

impl Element {
    pub fn text(text: impl Into<String>, layout: TextLayout) -> Self {
        Element::Text(Text::new(text, layout))
    }

    pub fn measure_height(&self, ctx: &DrawContext, width: u32) -> u32 {
        match self {
            Element::Text(t) => t.measure_height(ctx, width),
            Element::VerticalPadding(h) => *h,
            Element::GraphBody(g) => g.height(),
            Element::LegendEntry(e) => e.measure_height(ctx, width),
            Element::ListItem(child) => child.measure_height(ctx, width.saturating_sub(LIST_INDENT)),
            Element::Block(b) => b.measure_height(ctx, width),
        }
    }

    /// Measure at `width` and keep the heights that nested children are drawn with.
    pub fn layout(&mut self, ctx: &DrawContext, width: u32) -> u32 {
        match self {
            Element::ListItem(child) => child.layout(ctx, width.saturating_sub(LIST_INDENT)),
            Element::Block(b) => b.layout(ctx, width),
            Element::LegendEntry(e) => e.layout(ctx, width),
            other => other.measure_height(ctx, width),
        }
    }

    /// Paint into `band`; nothing outside it is touched.
    pub fn draw(&self, ctx: &DrawContext, canvas: &skia::Canvas, band: RectI32) {
        if band.width() <= 0 || band.height() <= 0 {
            return;
        }
        canvas.save();
        canvas.clip_rect(band.to_rect(), skia::ClipOp::Intersect, false);
        match self {
            Element::Text(t) => t.draw(ctx, canvas, band),
            Element::VerticalPadding(_) => {}
            Element::GraphBody(g) => g.draw(ctx, canvas, band),
            Element::LegendEntry(e) => e.draw(ctx, canvas, band),
            Element::ListItem(child) => draw_list_item(child, ctx, canvas, band),
            Element::Block(b) => b.draw(ctx, canvas, band),
        }
        canvas.restore();
    }
}

#[derive(Clone, Debug)]
pub struct Text {
    pub text: String,
    pub layout: TextLayout,
    /// `None` paints with the theme foreground.
    pub color: Option<skia::Color>,
}

impl Text {
    pub fn new(text: impl Into<String>, layout: TextLayout) -> Self {
        Self { text: text.into(), layout, color: None }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    fn measure_height(&self, ctx: &DrawContext, width: u32) -> u32 {
        ctx.shaper.measure_height(&self.text, self.layout, width)
    }

    fn draw(&self, ctx: &DrawContext, canvas: &skia::Canvas, band: RectI32) {
        let color = self.color.unwrap_or(ctx.theme.foreground);
        ctx.shaper.draw(
            canvas,
            &self.text,
            self.layout,
            color,
            band.left as f32,
            band.top as f32,
            band.width() as f32,
        );
    }
}

fn draw_list_item(child: &Element, ctx: &DrawContext, canvas: &skia::Canvas, band: RectI32) {
    let mut paint = ctx.hints().shape_paint(ctx.theme.foreground);
    paint.set_style(skia::paint::Style::Fill);
    let cx = band.left as f32 + LIST_INDENT as f32 * 0.5;
    let cy = band.top as f32 + 7.0;
    canvas.draw_circle((cx, cy), 2.0, &paint);
    child.draw(ctx, canvas, band.indent(LIST_INDENT as i32));
}

/// Stacked children over an optional background.
#[derive(Clone, Debug)]
pub struct Block {
    pub elements: Vec<Element>,
    pub background: Option<skia::Color>,
    heights: Vec<u32>,
}

impl Block {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements, background: None, heights: Vec::new() }
    }

    /// Child heights recorded by the last `layout`, empty before it.
    pub fn measured_heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn with_background(mut self, color: skia::Color) -> Self {
        self.background = Some(color);
        self
    }

    fn inner_width(width: u32) -> u32 {
        width.saturating_sub(2 * BLOCK_PADDING)
    }

    fn measure_height(&self, ctx: &DrawContext, width: u32) -> u32 {
        let inner = Self::inner_width(width);
        let content: u32 = self.elements.iter().map(|e| e.measure_height(ctx, inner)).sum();
        content + 2 * BLOCK_PADDING
    }

    fn layout(&mut self, ctx: &DrawContext, width: u32) -> u32 {
        let inner = Self::inner_width(width);
        self.heights = self.elements.iter_mut().map(|e| e.layout(ctx, inner)).collect();
        self.heights.iter().sum::<u32>() + 2 * BLOCK_PADDING
    }

    fn draw(&self, ctx: &DrawContext, canvas: &skia::Canvas, band: RectI32) {
        if let Some(bg) = self.background {
            let mut paint = ctx.hints().shape_paint(bg);
            paint.set_style(skia::paint::Style::Fill);
            canvas.draw_rect(band.to_rect(), &paint);
        }
        let pad = BLOCK_PADDING as i32;
        let inner_band = RectI32::from_ltrb(band.left + pad, band.top, band.right - pad, band.bottom);
        let inner = Self::inner_width(band.width().max(0) as u32);
        let mut y = pad;
        for (i, e) in self.elements.iter().enumerate() {
            let h = match self.heights.get(i) {
                Some(&h) => h,
                None => e.measure_height(ctx, inner),
            } as i32;
            e.draw(ctx, canvas, inner_band.row(y, h));
            y += h;
        }
    }
}
