use glam::Vec2;
use crate::api::types::TextureId;

/// Sprite component: defines how an entity appears visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    /// Which registered texture to draw.
    pub texture: TextureId,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Explicit world size. `None` draws the texture at its native size
    /// times the entity scale.
    pub size: Option<Vec2>,
}

impl SpriteComponent {
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            alpha: 1.0,
            size: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Stretch the texture over a fixed world-space rectangle.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }
}
