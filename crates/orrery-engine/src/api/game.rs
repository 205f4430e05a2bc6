use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::error::EngineResult;
use crate::input::queue::InputQueue;
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window title reported to the host.
    pub title: String,
    /// World width in game units (one unit = one window pixel).
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Longest frame delta handed to `Game::update`, in seconds (default: 0.25).
    pub max_frame_dt: f32,
    /// Maximum number of sprite instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of vector vertices (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::from("Orrery"),
            world_width: 800.0,
            world_height: 600.0,
            max_frame_dt: 0.25,
            max_instances: 64,
            max_vector_vertices: 65536,
            max_events: 16,
        }
    }
}

/// The contract every scene fulfills.
///
/// The runner calls `update` then `draw` once per host frame, in that order.
pub trait Game {
    /// Return engine configuration. Called before init and after every reconfigure.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Replace tunable settings from a JSON document.
    /// On error the game must keep its previous settings.
    fn configure(&mut self, _json: &str) -> EngineResult<()> {
        Ok(())
    }

    /// Register textures and spawn the initial entities.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame state update. `dt` is the sanitized frame delta in seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// Emit vector geometry for this frame. Sprites come from the scene.
    fn draw(&self, _ctx: &mut DrawContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            textures: TextureRegistry::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw-pass access, passed to Game::draw.
/// Geometry written here is drawn above Background sprites and below Bodies sprites.
pub struct DrawContext<'a> {
    pub vectors: &'a mut VectorState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, a: 0.5, b: 0.0, c: 0.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn default_config_caps_frame_delta() {
        let config = GameConfig::default();
        assert!(config.max_frame_dt > 0.0);
        assert!(config.max_instances > 0);
    }
}
