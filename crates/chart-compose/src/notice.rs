// File: crates/chart-compose/src/notice.rs
// Summary: Notices rendered into the image, and the soft clamps that produce them.

use tracing::warn;

use crate::chart::ChartConfig;
use crate::config::Limits;

/// Ordered, append-only diagnostics for one render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeList {
    notices: Vec<String>,
}

impl NoticeList {
    /// Start from the warnings handed in with the data.
    pub fn from_upstream(warnings: &[String]) -> Self {
        Self { notices: warnings.to_vec() }
    }

    pub fn push(&mut self, notice: impl Into<String>) {
        let notice = notice.into();
        warn!(%notice, "chart render degraded");
        self.notices.push(notice);
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.notices
    }
}

/// Size and zoom actually used for a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedSize {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
}

/// `min(requested, max)` for height, width and zoom, with a notice per reduction.
pub fn clamp_request(config: &ChartConfig, limits: &Limits, notices: &mut NoticeList) -> ClampedSize {
    if config.height > limits.max_height {
        notices.push(format!("Restricted graph height to {}.", limits.max_height));
    }
    if config.width > limits.max_width {
        notices.push(format!("Restricted graph width to {}.", limits.max_width));
    }

    let zoom = if !config.zoom.is_finite() || config.zoom <= 0.0 {
        notices.push(format!("Invalid zoom {}, using 1.", config.zoom));
        1.0_f64.min(limits.max_zoom)
    } else {
        if config.zoom > limits.max_zoom {
            notices.push(format!("Restricted zoom to {}.", limits.max_zoom));
        }
        config.zoom.min(limits.max_zoom)
    };

    ClampedSize {
        width: config.width.min(limits.max_width),
        height: config.height.min(limits.max_height),
        zoom,
    }
}

/// Whether the legend fits under the line cap; adds a notice when it does not.
pub fn legend_fits(num_lines: usize, limits: &Limits, notices: &mut NoticeList) -> bool {
    if num_lines > limits.max_lines_in_legend {
        notices.push(format!(
            "Too many lines, {} > {}, legend was suppressed.",
            num_lines, limits.max_lines_in_legend
        ));
        false
    } else {
        true
    }
}
