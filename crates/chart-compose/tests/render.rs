// File: crates/chart-compose/tests/render.rs
// Purpose: End-to-end renders: raster size, background, band accumulation and concurrency.

use chart_compose::chart::ChartConfig;
use chart_compose::geometry::RectI32;
use chart_compose::theme::Theme;
use chart_compose::{
    Block, ChartEngine, DataStats, DrawContext, Element, EngineConfig, LegendMode, Limits, Line, Plot,
    RenderingHintSet,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use skia_safe as skia;

fn sample_config() -> ChartConfig {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let end = start + Duration::hours(1);
    let wave = |phase: f64| (0..=60).map(|i| ((i as f64 + phase) * 0.2).sin() * 10.0 + 20.0).collect::<Vec<_>>();
    ChartConfig::new(start, end, 60_000)
        .with_title("Requests per second")
        .with_size(400, 150)
        .with_plot(
            Plot::new(vec![
                Line::new("us-east-1", skia::Color::from_argb(255, 255, 0, 0)).with_values(wave(0.0)),
                Line::new("eu-west-1", skia::Color::from_argb(255, 0, 128, 0)).with_values(wave(3.0)),
            ])
            .with_ylabel("rps"),
        )
        .with_legend(LegendMode::LabelsWithStats)
        .with_load_time(42, DataStats { input_lines: 10, input_datapoints: 610, output_lines: 2, output_datapoints: 122 })
}

fn rgba(c: skia::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

#[test]
fn raster_matches_zoomed_layout_size() {
    let engine = ChartEngine::default();
    let cfg = sample_config().with_zoom(1.5);
    let page = engine.render_page(&cfg).expect("render");
    let (w, h) = page.layout.raster_size();
    assert_eq!(page.image.width() as i64, w);
    assert_eq!(page.image.height() as i64, h);
    assert_eq!(w, (page.layout.width as f64 * 1.5).round() as i64);
    assert_eq!(page.layout.height, page.layout.items.iter().map(|p| p.height).sum::<u32>());
}

#[test]
fn zoom_is_clamped_before_allocation() {
    let limits = Limits { max_zoom: 1.0, ..Limits::default() };
    let engine = ChartEngine::new(&EngineConfig::default().with_limits(limits)).expect("engine");
    let page = engine.render_page(&sample_config().with_zoom(3.0)).expect("render");
    assert_eq!(page.image.width(), page.layout.width);
    assert_eq!(page.image.height(), page.layout.height);
    assert!(page.layout.notices.iter().any(|n| n == "Restricted zoom to 1."));
}

#[test]
fn background_is_opaque_canvas_color() {
    let engine = ChartEngine::default();
    let img = engine.render(&sample_config().with_legend(LegendMode::Off)).expect("render");
    // Right edge of the title row is padding only.
    let px = img.get_pixel(img.width() - 1, 0);
    assert_eq!(px.0, rgba(Theme::standard().canvas_background));
}

#[test]
fn fractional_zoom_leaves_no_transparent_edge() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let cfg = ChartConfig::new(start, start + Duration::minutes(10), 60_000)
        .with_size(400, 151)
        .with_zoom(1.5)
        .with_legend(LegendMode::Off)
        .with_plot(Plot::new(vec![
            Line::new("load", skia::Color::from_argb(255, 0, 0, 255)).with_values(vec![1.0, 3.0, 2.0, 5.0]),
        ]));
    let page = ChartEngine::default().render_page(&cfg).expect("render");
    assert_eq!((page.layout.width, page.layout.height), (475, 191));
    let img = page.image;
    assert_eq!(img.dimensions(), (713, 287));

    let (last_x, last_y) = (img.width() - 1, img.height() - 1);
    for y in 0..img.height() {
        assert_eq!(img.get_pixel(last_x, y).0[3], 255, "column {last_x}, row {y}");
    }
    for x in 0..img.width() {
        assert_eq!(img.get_pixel(x, last_y).0[3], 255, "column {x}, row {last_y}");
    }
    assert_eq!(img.get_pixel(last_x, last_y).0, rgba(Theme::standard().canvas_background));
}

#[test]
fn warnings_block_paints_at_its_accumulated_offset() {
    let engine = ChartEngine::default();
    let cfg = sample_config().with_warning("Series truncated.");
    let page = engine.render_page(&cfg).expect("render");

    let mut y = 0u32;
    let mut block_top = None;
    for placed in &page.layout.items {
        if matches!(placed.element, Element::Block(_)) {
            block_top = Some(y);
        }
        y += placed.height;
    }
    let block_top = block_top.expect("warnings block present");
    assert_eq!(y, page.layout.height);

    // Left inner margin of the block holds nothing but its background.
    let px = page.image.get_pixel(2, block_top + 2);
    assert_eq!(px.0, rgba(Theme::standard().warning_background));
    // The row just above belongs to the padding before the block.
    let above = page.image.get_pixel(2, block_top - 1);
    assert_eq!(above.0, rgba(Theme::standard().canvas_background));
}

#[test]
fn elements_do_not_paint_outside_their_band() {
    let ctx = DrawContext::new(RenderingHintSet::default());
    let mut surface = skia::surfaces::raster_n32_premul((40, 40)).expect("surface");
    surface.canvas().clear(skia::Color::TRANSPARENT);
    let block = Element::Block(Block::new(vec![Element::VerticalPadding(50)]).with_background(skia::Color::RED));
    block.draw(&ctx, surface.canvas(), RectI32::from_ltrb(0, 10, 40, 20));

    let info = skia::ImageInfo::new((40, 40), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let mut px = vec![0u8; 40 * 40 * 4];
    assert!(surface.read_pixels(&info, &mut px, 40 * 4, (0, 0)));
    let alpha = |x: usize, y: usize| px[(y * 40 + x) * 4 + 3];
    assert_eq!(alpha(5, 9), 0);
    assert_eq!(alpha(5, 10), 255);
    assert_eq!(alpha(5, 19), 255);
    assert_eq!(alpha(5, 20), 0);
}

#[test]
fn empty_plots_degrade_to_minimal_image() {
    let t = DateTime::<Utc>::UNIX_EPOCH;
    let cfg = ChartConfig::new(t, t + Duration::minutes(5), 60_000);
    let page = ChartEngine::default().render_page(&cfg).expect("render");
    assert!(page.image.width() > 0 && page.image.height() > 0);
    assert!(page.layout.notices.is_empty());
}

#[test]
fn concurrent_renders_share_one_engine() {
    let engine = ChartEngine::new(&EngineConfig::default().with_hint("antialiasing", "off")).expect("engine");
    let cfg = sample_config();
    let sizes: Vec<(u32, u32)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.render(&cfg).map(|img| img.dimensions())))
            .collect();
        handles.into_iter().map(|h| h.join().expect("thread").expect("render")).collect()
    });
    assert!(sizes.windows(2).all(|w| w[0] == w[1]));
}
