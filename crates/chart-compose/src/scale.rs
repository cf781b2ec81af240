// File: crates/chart-compose/src/scale.rs
// Summary: Sample-index (X) and value (Y) to pixel transforms for the graph body.

/// Horizontal mapping of sample indices onto `[left_px, right_px]`.
/// Sample `i` sits at `start + i * step`; the frame spans `[start, end]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub frame_ms: f64,
    pub step_ms: f64,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, frame_ms: i64, step_ms: i64) -> Self {
        Self {
            left_px,
            right_px,
            frame_ms: (frame_ms as f64).max(1.0),
            step_ms: (step_ms as f64).max(1.0),
        }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        let t = index as f64 * self.step_ms / self.frame_ms;
        self.left_px + t as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// Flat or empty ranges are widened so every value maps inside the band.
    pub fn new_linear(top_px: f32, bottom_px: f32, range: Option<(f64, f64)>) -> Self {
        let (mut vmin, mut vmax) = range.unwrap_or((0.0, 1.0));
        if (vmax - vmin).abs() < 1e-12 {
            if vmin == 0.0 {
                vmax = 1.0;
            } else {
                let pad = vmin.abs() * 0.5;
                vmin -= pad;
                vmax += pad;
            }
        }
        Self { top_px, bottom_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    /// `steps` evenly spaced values from min to max, inclusive.
    pub fn ticks(&self, steps: usize) -> Vec<f64> {
        linspace(self.vmin, self.vmax, steps)
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
