/// Scroll-to-zoom controller.
///
/// Zoom changes linearly with the wheel: every notch adds `step`, and the
/// result is clamped to the configured bounds.

use orrery_engine::{EngineError, EngineResult};

pub const DEFAULT_MIN_ZOOM: f64 = 0.07;
pub const DEFAULT_MAX_ZOOM: f64 = 2.0;

/// Validated zoom range: `0 < min <= max`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
}

impl ZoomBounds {
    pub fn new(min: f64, max: f64) -> EngineResult<Self> {
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(EngineError::InvalidConfig(format!(
                "zoom bounds must satisfy 0 < min <= max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

/// New zoom after a scroll of `scroll_delta` notches.
///
/// Always within `[min_zoom, max_zoom]`; a NaN delta leaves the (clamped)
/// zoom unchanged. Panics if `min_zoom > max_zoom`, like `f64::clamp`.
pub fn apply_scroll(current_zoom: f64, scroll_delta: f64, step: f64, min_zoom: f64, max_zoom: f64) -> f64 {
    let target = current_zoom + scroll_delta * step;
    let target = if target.is_nan() { current_zoom } else { target };
    target.clamp(min_zoom, max_zoom)
}

/// Current zoom plus its bounds and step.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    initial: f64,
    bounds: ZoomBounds,
    step: f64,
}

impl Viewport {
    pub fn new(initial: f64, bounds: ZoomBounds, step: f64) -> Self {
        let initial = if initial.is_nan() { bounds.min() } else { bounds.clamp(initial) };
        Self {
            zoom: initial,
            initial,
            bounds,
            step,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Apply one scroll event. Returns true if the zoom changed.
    pub fn on_scroll(&mut self, scroll_delta: f64) -> bool {
        let next = apply_scroll(self.zoom, scroll_delta, self.step, self.bounds.min(), self.bounds.max());
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Back to the starting zoom.
    pub fn reset(&mut self) {
        self.zoom = self.initial;
    }
}
