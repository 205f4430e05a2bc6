/// Tunable settings. Every field has a default, so a JSON document only
/// needs the keys it changes:
///
/// ```json
/// { "zoom_step": 0.05, "minor_axis_ratio": 0.9 }
/// ```

use serde::{Deserialize, Serialize};
use orrery_engine::{EngineError, EngineResult, VectorColor};

use crate::bodies::Body;
use crate::viewport::{ZoomBounds, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarSystemConfig {
    pub title: String,
    /// Window size in pixels.
    pub window_width: f32,
    pub window_height: f32,

    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per wheel notch.
    pub zoom_step: f64,

    /// Earth's angular speed in degrees per second.
    pub base_speed: f64,
    /// Pixels per AU at zoom 1.
    pub au_to_px: f64,
    /// Semi-minor over semi-major axis, shared by every orbit.
    pub minor_axis_ratio: f64,

    pub sun_scale: f64,
    pub background_alpha: f32,
    pub orbit_line_width: f32,
    /// RGBA, 0.0 - 1.0.
    pub orbit_color: [f32; 4],
    /// Directory prefix for every texture path.
    pub asset_dir: String,
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        Self {
            title: String::from("Solar System"),
            window_width: 1280.0,
            window_height: 720.0,
            initial_zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: 0.1,
            base_speed: 50.0,
            au_to_px: 200.0,
            minor_axis_ratio: 0.65,
            sun_scale: 1.0,
            background_alpha: 100.0 / 255.0,
            orbit_line_width: 1.0,
            orbit_color: {
                let c = VectorColor::DARK_GRAY;
                [c.r, c.g, c.b, c.a]
            },
            asset_dir: String::from("planets"),
        }
    }
}

impl SolarSystemConfig {
    /// Parse and validate a JSON settings document.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(EngineError::InvalidConfig(format!("{name} must be positive, got {value}")))
            }
        };

        positive("window_width", self.window_width as f64)?;
        positive("window_height", self.window_height as f64)?;
        self.zoom_bounds()?;
        positive("zoom_step", self.zoom_step)?;
        positive("au_to_px", self.au_to_px)?;
        positive("sun_scale", self.sun_scale)?;
        positive("orbit_line_width", self.orbit_line_width as f64)?;
        positive("minor_axis_ratio", self.minor_axis_ratio)?;
        if !self.initial_zoom.is_finite() {
            return Err(EngineError::InvalidConfig(format!(
                "initial_zoom must be finite, got {}",
                self.initial_zoom
            )));
        }
        if !self.base_speed.is_finite() {
            return Err(EngineError::InvalidConfig(format!(
                "base_speed must be finite, got {}",
                self.base_speed
            )));
        }
        if !(0.0..=1.0).contains(&self.background_alpha) {
            return Err(EngineError::InvalidConfig(format!(
                "background_alpha must be within [0, 1], got {}",
                self.background_alpha
            )));
        }
        if self.orbit_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(EngineError::InvalidConfig(format!(
                "orbit_color components must be within [0, 1], got {:?}",
                self.orbit_color
            )));
        }
        Ok(())
    }

    pub fn zoom_bounds(&self) -> EngineResult<ZoomBounds> {
        ZoomBounds::new(self.min_zoom, self.max_zoom)
    }

    /// Semi-major and semi-minor axes in pixels at zoom 1.
    pub fn semi_axes(&self, body: &Body) -> (f64, f64) {
        let a = body.semi_major_au * self.au_to_px;
        (a, a * self.minor_axis_ratio)
    }

    /// Angular speed in degrees per second.
    pub fn angular_speed(&self, body: &Body) -> f64 {
        self.base_speed * body.relative_speed
    }
}
