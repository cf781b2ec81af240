// File: crates/chart-compose/src/error.rs
// Summary: Startup configuration errors and the few platform failures a render can hit.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RenderResult<T> = Result<T, RenderError>;

/// Raised while building a [`crate::ChartEngine`]; the engine never becomes ready.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rendering hint key '{0}'")]
    UnknownHintKey(String),

    #[error("unknown value '{value}' for rendering hint '{key}'")]
    UnknownHintValue { key: String, value: String },

    #[error("invalid limit {name}: {value}")]
    InvalidLimit { name: &'static str, value: String },

    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Platform failures only. Oversized requests degrade into notices instead.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid raster size: width={width}, height={height}")]
    InvalidRasterSize { width: i64, height: i64 },

    #[error("failed to create raster surface {width}x{height}")]
    SurfaceAllocation { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    PixelReadback,
}
