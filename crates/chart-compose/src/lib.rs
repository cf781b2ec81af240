// File: crates/chart-compose/src/lib.rs
// Summary: Library entry point; chart page layout (graph, legend, captions, warnings) rendered to RGBA.

pub mod caption;
pub mod chart;
pub mod config;
pub mod element;
pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod graph;
pub mod hints;
pub mod layout;
pub mod legend;
pub mod notice;
pub mod raster;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;

pub use chart::{ChartConfig, DataStats, LegendMode, Plot};
pub use config::{EngineConfig, Limits};
pub use element::{Block, DrawContext, Element, Text};
pub use engine::{ChartEngine, RenderedPage};
pub use error::{ConfigError, RenderError};
pub use hints::RenderingHintSet;
pub use layout::{compose, Layout, PageParts};
pub use notice::NoticeList;
pub use series::{Line, SummaryStats};
