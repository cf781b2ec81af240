// File: crates/chart-compose/src/layout.rs
// Summary: Page compositor: ordered element sequence, shared width and the measured total height.
// Notes:
// - Order: title, padding, graph body, then (legend on) legend entries, captions and
//   the warnings block.
// - Every element is measured exactly once, at the graph body's width; the stored
//   heights are what the rasterizer paints with.

use tracing::debug;

use crate::caption::build_captions;
use crate::chart::{ChartConfig, LegendMode};
use crate::config::Limits;
use crate::element::{Block, DrawContext, Element, Text};
use crate::graph::GraphBody;
use crate::legend::build_legend;
use crate::notice::{clamp_request, legend_fits, NoticeList};
use crate::text::{TextAlign, TextLayout};
use crate::theme::{FontSpec, Theme};

/// Gap between the title and the graph body.
pub const TITLE_PADDING: u32 = 5;
/// Gap above the warnings block.
pub const WARNINGS_PADDING: u32 = 15;

/// Unmeasured page: the elements in paint order plus what sizing needs.
#[derive(Clone, Debug)]
pub struct PageParts {
    pub elements: Vec<Element>,
    pub width: u32,
    pub zoom: f64,
    pub notices: Vec<String>,
}

/// Build the ordered element sequence for `config`.
pub fn compose(config: &ChartConfig, limits: &Limits) -> PageParts {
    let mut notices = NoticeList::from_upstream(&config.warnings);
    let size = clamp_request(config, limits, &mut notices);

    let mut parts = Vec::new();
    if let Some(title) = &config.title {
        parts.push(Element::text(title.clone(), TextLayout::truncated(FontSpec::LARGE, TextAlign::Center)));
    }
    parts.push(Element::VerticalPadding(TITLE_PADDING));

    let graph = GraphBody::new(config, size.width, size.height);
    let width = graph.width();
    parts.push(Element::GraphBody(graph));

    if config.legend != LegendMode::Off {
        if legend_fits(config.num_lines(), limits, &mut notices) {
            parts.extend(build_legend(&config.plots, config.legend));
        }
        parts.extend(build_captions(config));
        if !notices.is_empty() {
            parts.push(Element::VerticalPadding(WARNINGS_PADDING));
            parts.push(warnings_block(&notices));
        }
    } else if !notices.is_empty() {
        debug!(count = notices.len(), "legend off, notices not rendered");
    }

    PageParts { elements: parts, width, zoom: size.zoom, notices: notices.into_vec() }
}

/// Bold "Warnings" header and one list item per notice, on the warning background.
pub fn warnings_block(notices: &NoticeList) -> Element {
    let header = Text::new("Warnings", TextLayout::wrapped(FontSpec::NORMAL.bold(), TextAlign::Left));
    let mut elements = vec![Element::Text(header)];
    elements.extend(notices.iter().map(|n| {
        Element::ListItem(Box::new(Element::text(n, TextLayout::wrapped(FontSpec::NORMAL, TextAlign::Left))))
    }));
    Element::Block(Block::new(elements).with_background(Theme::standard().warning_background))
}

/// An element with the height it was measured at.
#[derive(Clone, Debug)]
pub struct Placed {
    pub element: Element,
    pub height: u32,
}

/// A fully measured page.
#[derive(Clone, Debug)]
pub struct Layout {
    pub items: Vec<Placed>,
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub notices: Vec<String>,
}

impl Layout {
    pub fn measure(ctx: &DrawContext, parts: PageParts) -> Self {
        let width = parts.width;
        let items: Vec<Placed> = parts
            .elements
            .into_iter()
            .map(|mut element| {
                let height = element.layout(ctx, width);
                Placed { element, height }
            })
            .collect();
        let height = items.iter().map(|p| p.height).sum();
        debug!(width, height, zoom = parts.zoom, elements = items.len(), "page measured");
        Self { items, width, height, zoom: parts.zoom, notices: parts.notices }
    }

    /// Raster dimensions after zoom, rounded to whole pixels.
    pub fn raster_size(&self) -> (i64, i64) {
        (
            (self.width as f64 * self.zoom).round() as i64,
            (self.height as f64 * self.zoom).round() as i64,
        )
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.items.iter().map(|p| &p.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Plot;
    use crate::hints::RenderingHintSet;
    use crate::series::Line;
    use chrono::{DateTime, Duration, Utc};
    use skia_safe as skia;

    fn base() -> ChartConfig {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        ChartConfig::new(start, start + Duration::hours(1), 60_000)
    }

    fn kinds(parts: &PageParts) -> Vec<&'static str> {
        parts
            .elements
            .iter()
            .map(|e| match e {
                Element::Text(_) => "text",
                Element::VerticalPadding(_) => "pad",
                Element::GraphBody(_) => "graph",
                Element::LegendEntry(_) => "entry",
                Element::ListItem(_) => "item",
                Element::Block(_) => "block",
            })
            .collect()
    }

    #[test]
    fn minimal_page_is_padding_graph_and_frame() {
        let parts = compose(&base(), &Limits::default());
        assert_eq!(kinds(&parts), vec!["pad", "graph", "pad", "text"]);
        assert!(parts.notices.is_empty());
    }

    #[test]
    fn full_page_order() {
        let cfg = base()
            .with_title("requests")
            .with_plot(Plot::new(vec![Line::new("a", skia::Color::RED)]))
            .with_load_time(50, Default::default())
            .with_warning("partial data");
        let parts = compose(&cfg, &Limits::default());
        assert_eq!(
            kinds(&parts),
            vec!["text", "pad", "graph", "pad", "entry", "pad", "text", "text", "pad", "block"]
        );
    }

    #[test]
    fn warnings_block_holds_header_and_items_in_order() {
        let cfg = base().with_warning("first").with_warning("second").with_size(700, 5000);
        let parts = compose(&cfg, &Limits::default());
        let Some(Element::Block(block)) = parts.elements.last() else {
            panic!("expected warnings block last");
        };
        let texts: Vec<String> = block
            .elements
            .iter()
            .map(|e| match e {
                Element::Text(t) => t.text.clone(),
                Element::ListItem(inner) => match inner.as_ref() {
                    Element::Text(t) => format!("- {}", t.text),
                    other => panic!("unexpected list item {other:?}"),
                },
                other => panic!("unexpected block child {other:?}"),
            })
            .collect();
        assert_eq!(
            texts,
            vec!["Warnings", "- first", "- second", "- Restricted graph height to 1000."]
        );
        assert_eq!(block.background, Some(Theme::standard().warning_background));
    }

    #[test]
    fn legend_off_drops_legend_captions_and_warnings() {
        let cfg = base()
            .with_legend(LegendMode::Off)
            .with_plot(Plot::new(vec![Line::new("a", skia::Color::RED)]))
            .with_load_time(50, Default::default())
            .with_size(99_999, 300);
        let parts = compose(&cfg, &Limits::default());
        assert_eq!(kinds(&parts), vec!["pad", "graph"]);
        assert_eq!(parts.notices, vec!["Restricted graph width to 2000."]);
    }

    #[test]
    fn too_many_lines_suppresses_entries_only() {
        let lines = (0..4).map(|i| Line::new(format!("l{i}"), skia::Color::RED)).collect();
        let cfg = base().with_plot(Plot::new(lines));
        let limits = Limits { max_lines_in_legend: 3, ..Limits::default() };
        let parts = compose(&cfg, &limits);
        assert!(!kinds(&parts).contains(&"entry"));
        assert_eq!(parts.notices, vec!["Too many lines, 4 > 3, legend was suppressed."]);
        assert_eq!(kinds(&parts).last(), Some(&"block"));
    }

    #[test]
    fn width_comes_from_graph_body() {
        let cfg = base().with_size(640, 200);
        let parts = compose(&cfg, &Limits::default());
        let graph_width = parts
            .elements
            .iter()
            .find_map(|e| match e {
                Element::GraphBody(g) => Some(g.width()),
                _ => None,
            })
            .unwrap();
        assert_eq!(parts.width, graph_width);
    }

    #[test]
    fn measured_height_is_sum_of_fixed_heights() {
        let ctx = DrawContext::new(RenderingHintSet::default());
        let graph = GraphBody::new(&base(), 300, 120);
        let graph_h = graph.height();
        let parts = PageParts {
            width: graph.width(),
            elements: vec![
                Element::VerticalPadding(5),
                Element::GraphBody(graph),
                Element::VerticalPadding(15),
                Element::Block(Block::new(vec![Element::VerticalPadding(8)])),
            ],
            zoom: 1.5,
            notices: Vec::new(),
        };
        let layout = Layout::measure(&ctx, parts);
        let expected = 5 + graph_h + 15 + (8 + 2 * crate::element::BLOCK_PADDING);
        assert_eq!(layout.height, expected);
        assert_eq!(layout.items.iter().map(|p| p.height).sum::<u32>(), expected);
        let blocks: Vec<&Block> = layout
            .elements()
            .filter_map(|e| match e {
                Element::Block(b) => Some(b),
                _ => None,
            })
            .collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].measured_heights(), &[8]);
        assert_eq!(
            layout.raster_size(),
            ((layout.width as f64 * 1.5).round() as i64, (expected as f64 * 1.5).round() as i64)
        );
    }
}
