// File: crates/chart-compose/src/text.rs
// Summary: Text shaper for page elements using Skia textlayout, with the engine's hints applied.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::hints::RenderingHintSet;
use crate::theme::FontSpec;

const SANS_FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl From<TextAlign> for skia::textlayout::TextAlign {
    fn from(a: TextAlign) -> Self {
        match a {
            TextAlign::Left => skia::textlayout::TextAlign::Left,
            TextAlign::Center => skia::textlayout::TextAlign::Center,
            TextAlign::Right => skia::textlayout::TextAlign::Right,
        }
    }
}

/// How a block of text is laid out: wrapped to the width, or cut to one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLayout {
    pub font: FontSpec,
    pub align: TextAlign,
    pub single_line: bool,
}

impl TextLayout {
    pub const fn wrapped(font: FontSpec, align: TextAlign) -> Self {
        Self { font, align, single_line: false }
    }

    pub const fn truncated(font: FontSpec, align: TextAlign) -> Self {
        Self { font, align, single_line: true }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
    typeface: Option<skia::Typeface>,
    hints: RenderingHintSet,
}

impl TextShaper {
    pub fn new(hints: RenderingHintSet) -> Self {
        let mut fc = FontCollection::new();
        let mgr = skia::FontMgr::default();
        let typeface = SANS_FAMILIES
            .iter()
            .find_map(|family| mgr.match_family_style(*family, skia::FontStyle::normal()));
        // Use system manager fallback
        fc.set_default_font_manager(mgr, None);
        Self { fonts: fc, typeface, hints }
    }

    pub fn hints(&self) -> &RenderingHintSet {
        &self.hints
    }

    fn make_style(&self, font: FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.points());
        ts.set_font_families(&SANS_FAMILIES);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_foreground_paint(&self.hints.text_paint(color));
        ts
    }

    pub fn layout(&self, text: &str, layout: TextLayout, color: skia::Color, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(layout.align.into());
        if layout.single_line {
            pstyle.set_max_lines(1usize);
            pstyle.set_ellipsis("...");
        }
        if !self.hints.paragraph_hinting() {
            pstyle.turn_hinting_off();
        }
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(layout.font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    /// Height in whole pixels of `text` laid out at `width`.
    pub fn measure_height(&self, text: &str, layout: TextLayout, width: u32) -> u32 {
        let p = self.layout(text, layout, skia::Color::TRANSPARENT, width as f32);
        p.height().ceil().max(0.0) as u32
    }

    /// Paint with the top-left corner at (x, y).
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        layout: TextLayout,
        color: skia::Color,
        x: f32,
        y: f32,
        width: f32,
    ) {
        let mut p = self.layout(text, layout, color, width);
        p.paint(canvas, (x, y));
    }

    /// Raw font for short axis labels drawn with `draw_str`.
    pub fn label_font(&self, size: f32) -> skia::Font {
        let mut font = match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        };
        self.hints.apply_to_font(&mut font);
        font
    }
}
