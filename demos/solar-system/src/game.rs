/// Solar System: animated orrery with elliptical orbits and scroll-to-zoom.
///
/// Nine bodies circle a fixed sun on axis-aligned ellipses. The wheel zooms
/// the whole system linearly around the window center; orbit outlines are
/// stroked as vectors between the backdrop and the body sprites.

use glam::{DVec2, Vec2};
use orrery_engine::*;

use crate::bodies::{self, Body, BODIES};
use crate::config::SolarSystemConfig;
use crate::orbit::{self, OrbitState};
use crate::viewport::Viewport;

// ── Game event kinds to the host ─────────────────────────────────────

/// Zoom changed: `a` = zoom, `b` = min zoom, `c` = max zoom.
pub const EVENT_ZOOM: f32 = 1.0;

fn to_world(p: DVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// A spawned body and its orbit.
#[derive(Debug, Clone)]
struct Planet {
    entity: EntityId,
    /// Sprite scale at zoom 1.
    base_scale: f64,
    orbit: OrbitState,
}

pub struct SolarSystem {
    config: SolarSystemConfig,
    viewport: Viewport,
    /// Window center; every orbit is centered here.
    center: DVec2,

    sun_id: Option<EntityId>,
    planets: Vec<Planet>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_config(SolarSystemConfig::default())
    }

    /// Build from settings that already passed validation.
    pub fn with_config(config: SolarSystemConfig) -> Self {
        let viewport = Viewport::new(
            config.initial_zoom,
            config.zoom_bounds().unwrap_or_default(),
            config.zoom_step,
        );
        let center = DVec2::new(config.window_width as f64, config.window_height as f64) / 2.0;
        Self {
            config,
            viewport,
            center,
            sun_id: None,
            planets: Vec::with_capacity(bodies::BODY_COUNT),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Orbit state of the body with this name, if spawned.
    pub fn orbit(&self, name: &str) -> Option<&OrbitState> {
        BODIES
            .iter()
            .position(|b| b.name == name)
            .and_then(|i| self.planets.get(i))
            .map(|p| &p.orbit)
    }

    /// Register every texture up front so the manifest order is stable.
    fn register_textures(&self, ctx: &mut EngineContext) {
        let dir = &self.config.asset_dir;
        ctx.textures.register(bodies::asset_path(dir, bodies::BACKGROUND_TEXTURE));
        ctx.textures.register(bodies::asset_path(dir, bodies::SUN_TEXTURE));
        for body in BODIES.iter() {
            ctx.textures.register(bodies::texture_path(dir, body.name));
        }
    }

    /// Spawn the backdrop, the sun and every body. Textures must already be registered.
    fn populate(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        let zoom = self.viewport.zoom();
        let dir = self.config.asset_dir.clone();

        let window = Vec2::new(self.config.window_width, self.config.window_height);
        let backdrop = ctx
            .textures
            .sprite(&bodies::asset_path(&dir, bodies::BACKGROUND_TEXTURE))?
            .with_size(window)
            .with_alpha(self.config.background_alpha);
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(bodies::BACKGROUND_NAME)
                .with_pos(window / 2.0)
                .with_layer(RenderLayer::Background)
                .with_sprite(backdrop),
        );

        let sun = ctx.textures.sprite(&bodies::asset_path(&dir, bodies::SUN_TEXTURE))?;
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(bodies::SUN_NAME)
                .with_pos(to_world(self.center))
                .with_scale((self.config.sun_scale * zoom) as f32)
                .with_layer(RenderLayer::Bodies)
                .with_sprite(sun),
        );
        self.sun_id = Some(id);

        for body in BODIES.iter() {
            let sprite = ctx.textures.sprite(&bodies::texture_path(&dir, body.name))?;
            self.spawn_planet(ctx, body, sprite);
        }
        Ok(())
    }

    fn spawn_planet(&mut self, ctx: &mut EngineContext, body: &Body, sprite: SpriteComponent) {
        let (a, b) = self.config.semi_axes(body);
        let mut state = OrbitState::new(self.center, a, b, self.config.angular_speed(body));
        let zoom = self.viewport.zoom();
        state.apply(orbit::advance(&state, 0.0, zoom));

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(body.name)
                .with_pos(to_world(state.position))
                .with_scale((body.sprite_scale * zoom) as f32)
                .with_layer(RenderLayer::Bodies)
                .with_sprite(sprite),
        );
        self.planets.push(Planet {
            entity: id,
            base_scale: body.sprite_scale,
            orbit: state,
        });
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            title: self.config.title.clone(),
            world_width: self.config.window_width,
            world_height: self.config.window_height,
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> EngineResult<()> {
        let config = SolarSystemConfig::from_json(json)?;
        *self = Self::with_config(config);
        log::info!(
            "solar-system: zoom [{}, {}] step {}",
            self.config.min_zoom,
            self.config.max_zoom,
            self.config.zoom_step
        );
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.viewport.reset();
        self.planets.clear();
        self.sun_id = None;

        self.register_textures(ctx);
        if let Err(err) = self.populate(ctx) {
            log::error!("solar-system: scene setup failed: {}", err);
            return;
        }

        log::info!(
            "solar-system: {} bodies around ({}, {}), zoom {}",
            self.planets.len(),
            self.center.x,
            self.center.y,
            self.viewport.zoom()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // ── Zoom ─────────────────────────────────────────────────────
        let mut zoomed = false;
        for delta in input.scroll_deltas() {
            zoomed |= self.viewport.on_scroll(delta as f64);
        }
        let zoom = self.viewport.zoom();
        if zoomed {
            let bounds = self.viewport.bounds();
            log::debug!("zoom {:.2} (min {}, max {})", zoom, bounds.min(), bounds.max());
            ctx.emit_event(GameEvent {
                kind: EVENT_ZOOM,
                a: zoom as f32,
                b: bounds.min() as f32,
                c: bounds.max() as f32,
            });
        }

        // ── Orbits ───────────────────────────────────────────────────
        for planet in &mut self.planets {
            let step = orbit::advance(&planet.orbit, dt as f64, zoom);
            planet.orbit.apply(step);
            if let Some(entity) = ctx.scene.get_mut(planet.entity) {
                entity.pos = to_world(step.position);
                entity.scale = (planet.base_scale * zoom) as f32;
            }
        }

        if let Some(sun) = self.sun_id {
            if let Some(entity) = ctx.scene.get_mut(sun) {
                entity.scale = (self.config.sun_scale * zoom) as f32;
            }
        }
    }

    fn draw(&self, ctx: &mut DrawContext) {
        let [r, g, b, a] = self.config.orbit_color;
        let color = VectorColor::new(r, g, b, a);
        let zoom = self.viewport.zoom();
        let center = to_world(self.center);
        for planet in &self.planets {
            ctx.vectors.stroke_ellipse(
                center,
                to_world(planet.orbit.outline_radii(zoom)),
                self.config.orbit_line_width,
                color,
            );
        }
    }
}
