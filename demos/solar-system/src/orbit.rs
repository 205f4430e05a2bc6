/// Elliptical orbit stepping: pure math, no engine dependencies.
///
/// Parametric ellipse around a fixed center:
///   x = cx + a·zoom·cos θ
///   y = cy + b·zoom·sin θ
/// with θ advancing at a constant angular speed. Uses f64 throughout;
/// game.rs converts to f32 when writing entity positions.

use glam::DVec2;

/// Orbital state of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Point the body orbits (the sun's screen position). Never changes.
    pub center: DVec2,
    /// Semi-major axis (horizontal radius) at zoom 1, in pixels.
    pub a: f64,
    /// Semi-minor axis (vertical radius) at zoom 1, in pixels.
    pub b: f64,
    /// Current angle in degrees, always in [0, 360).
    pub angle_deg: f64,
    /// Angular speed in degrees per second.
    pub speed: f64,
    /// Current screen position. Only ever written from `advance`.
    pub position: DVec2,
}

/// Result of one orbit step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitStep {
    pub position: DVec2,
    pub angle_deg: f64,
}

impl OrbitState {
    /// A body at angle 0 (3 o'clock), positioned for zoom 1.
    pub fn new(center: DVec2, a: f64, b: f64, speed: f64) -> Self {
        Self {
            center,
            a,
            b,
            angle_deg: 0.0,
            speed,
            position: position_at(center, a, b, 0.0, 1.0),
        }
    }

    /// Store the result of `advance`.
    pub fn apply(&mut self, step: OrbitStep) {
        self.angle_deg = step.angle_deg;
        self.position = step.position;
    }

    /// Half-extents of the orbit path at the given zoom.
    pub fn outline_radii(&self, zoom: f64) -> DVec2 {
        DVec2::new(self.a * zoom, self.b * zoom)
    }
}

/// Wrap an angle into [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Point on the ellipse at `angle_deg`, scaled by `zoom` around `center`.
pub fn position_at(center: DVec2, a: f64, b: f64, angle_deg: f64, zoom: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    DVec2::new(
        center.x + a * zoom * rad.cos(),
        center.y + b * zoom * rad.sin(),
    )
}

/// Advance a body by `elapsed` seconds at the given zoom.
///
/// Negative or NaN `elapsed` counts as 0. `zoom` must be positive; the
/// viewport keeps it within validated bounds.
pub fn advance(body: &OrbitState, elapsed: f64, zoom: f64) -> OrbitStep {
    let elapsed = if elapsed > 0.0 { elapsed } else { 0.0 };
    let angle_deg = wrap_degrees(body.angle_deg + body.speed * elapsed);
    OrbitStep {
        position: position_at(body.center, body.a, body.b, angle_deg, zoom),
        angle_deg,
    }
}
