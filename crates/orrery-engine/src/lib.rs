pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, DrawContext};
pub use api::types::{EntityId, TextureId, GameEvent};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::{FrameCounts, ProtocolLayout, HEADER_FLOATS};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::SpriteComponent;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use error::{EngineError, EngineResult};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use systems::render::build_render_buffer;
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
