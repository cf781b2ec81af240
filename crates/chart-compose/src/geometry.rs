// File: crates/chart-compose/src/geometry.rs
// Summary: Pixel bands handed to elements when drawing.

use skia_safe as skia;

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Same band with `dx` removed from the left edge.
    pub const fn indent(&self, dx: i32) -> Self {
        Self { left: self.left + dx, ..*self }
    }

    /// Slice of height `h` starting `dy` below the top edge.
    pub const fn row(&self, dy: i32, h: i32) -> Self {
        Self { left: self.left, top: self.top + dy, right: self.right, bottom: self.top + dy + h }
    }

    pub fn to_rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
