// File: crates/chart-compose/src/engine.rs
// Summary: Public entry point: validated startup configuration plus stateless per-call rendering.

use image::RgbaImage;
use tracing::{debug, info};

use crate::chart::ChartConfig;
use crate::config::{EngineConfig, Limits};
use crate::element::DrawContext;
use crate::error::{ConfigResult, RenderResult};
use crate::hints::RenderingHintSet;
use crate::layout::{compose, Layout};
use crate::raster::rasterize;

/// Holds only immutable startup state, so one engine can serve concurrent renders.
#[derive(Clone, Debug)]
pub struct ChartEngine {
    hints: RenderingHintSet,
    limits: Limits,
}

/// A finished render together with the layout it was painted from.
pub struct RenderedPage {
    pub layout: Layout,
    pub image: RgbaImage,
}

impl ChartEngine {
    /// Resolve hint names and validate limits. Any failure keeps the engine from starting.
    pub fn new(config: &EngineConfig) -> ConfigResult<Self> {
        config.limits.validate()?;
        let hints = config.hint_set()?;
        info!(?hints, limits = ?config.limits, "chart engine ready");
        Ok(Self { hints, limits: config.limits })
    }

    pub fn hints(&self) -> &RenderingHintSet {
        &self.hints
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Measure the page without painting it.
    pub fn layout(&self, config: &ChartConfig) -> Layout {
        let ctx = DrawContext::new(self.hints);
        Layout::measure(&ctx, compose(config, &self.limits))
    }

    pub fn render_page(&self, config: &ChartConfig) -> RenderResult<RenderedPage> {
        let ctx = DrawContext::new(self.hints);
        let layout = Layout::measure(&ctx, compose(config, &self.limits));
        let image = rasterize(&ctx, &layout)?;
        debug!(width = image.width(), height = image.height(), "chart rendered");
        Ok(RenderedPage { layout, image })
    }

    pub fn render(&self, config: &ChartConfig) -> RenderResult<RgbaImage> {
        self.render_page(config).map(|page| page.image)
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self { hints: RenderingHintSet::default(), limits: Limits::default() }
    }
}
