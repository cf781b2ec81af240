// File: crates/chart-compose/src/raster.rs
// Summary: Paints a measured layout onto a zoom-scaled Skia CPU raster and reads it back as RGBA.

use image::RgbaImage;
use skia_safe as skia;

use crate::element::DrawContext;
use crate::error::{RenderError, RenderResult};
use crate::geometry::RectI32;
use crate::layout::Layout;

/// Allocate the zoomed surface, clear it to the background and paint every element top to bottom.
pub fn rasterize(ctx: &DrawContext, layout: &Layout) -> RenderResult<RgbaImage> {
    let (w, h) = layout.raster_size();
    if w <= 0 || h <= 0 || w > i32::MAX as i64 || h > i32::MAX as i64 {
        return Err(RenderError::InvalidRasterSize { width: w, height: h });
    }
    let (w, h) = (w as i32, h as i32);

    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or(RenderError::SurfaceAllocation { width: w, height: h })?;
    paint_layout(ctx, surface.canvas(), layout);

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(RenderError::PixelReadback);
    }
    RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or(RenderError::PixelReadback)
}

/// Coordinates below are unscaled layout units; the zoom lives in the canvas matrix.
fn paint_layout(ctx: &DrawContext, canvas: &skia::Canvas, layout: &Layout) {
    // Clear in device space: a rounded raster can be wider than width * zoom.
    canvas.clear(ctx.theme.canvas_background);
    let zoom = layout.zoom as f32;
    canvas.scale((zoom, zoom));

    let width = layout.width as i32;
    let mut y = 0i32;
    for placed in &layout.items {
        let h = placed.height as i32;
        placed.element.draw(ctx, canvas, RectI32::from_ltrb(0, y, width, y + h));
        y += h;
    }
}
