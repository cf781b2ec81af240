// File: crates/chart-compose/src/theme.rs
// Summary: Fixed palette and font sizes for the chart page. Not configurable per render.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub canvas_background: skia::Color,
    pub warning_background: skia::Color,
    pub graph_background: skia::Color,
    pub foreground: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub swatch_border: skia::Color,
}

impl Theme {
    pub fn standard() -> Self {
        Self {
            canvas_background: skia::Color::from_argb(255, 255, 255, 255),
            warning_background: skia::Color::from_argb(255, 255, 240, 180),
            graph_background: skia::Color::from_argb(255, 255, 255, 255),
            foreground: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            swatch_border: skia::Color::from_argb(255, 100, 100, 110),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

/// Font size classes. Bold is a derivative of any of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Normal,
    Small,
}

impl FontSize {
    pub const fn points(self) -> f32 {
        match self {
            FontSize::Large => 14.0,
            FontSize::Normal => 12.0,
            FontSize::Small => 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSpec {
    pub size: FontSize,
    pub bold: bool,
}

impl FontSpec {
    pub const LARGE: FontSpec = FontSpec { size: FontSize::Large, bold: false };
    pub const NORMAL: FontSpec = FontSpec { size: FontSize::Normal, bold: false };
    pub const SMALL: FontSpec = FontSpec { size: FontSize::Small, bold: false };

    pub const fn bold(self) -> Self {
        FontSpec { size: self.size, bold: true }
    }

    pub const fn points(self) -> f32 {
        self.size.points()
    }
}
