use std::collections::HashMap;
use crate::api::types::TextureId;
use crate::components::sprite::SpriteComponent;
use crate::error::{EngineError, EngineResult};

/// Registry of textures by asset path.
/// Games register paths during init; the host loads the files listed
/// in the resulting manifest and indexes them by `TextureId`.
pub struct TextureRegistry {
    paths: Vec<String>,
    ids: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Register an asset path. Registering the same path twice returns the same ID.
    pub fn register(&mut self, path: impl Into<String>) -> TextureId {
        let path = path.into();
        if let Some(&id) = self.ids.get(&path) {
            return id;
        }
        let id = TextureId(self.paths.len() as u32);
        self.ids.insert(path.clone(), id);
        self.paths.push(path);
        id
    }

    /// Look up a texture by path. Returns None if not registered.
    pub fn get(&self, path: &str) -> Option<TextureId> {
        self.ids.get(path).copied()
    }

    /// Build an opaque sprite for a registered path.
    pub fn sprite(&self, path: &str) -> EngineResult<SpriteComponent> {
        self.get(path)
            .map(SpriteComponent::new)
            .ok_or_else(|| EngineError::UnknownTexture(path.to_string()))
    }

    /// Asset path of a registered texture.
    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.paths.get(id.0 as usize).map(String::as_str)
    }

    /// Iterate over `(id, path)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TextureId, &str)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (TextureId(i as u32), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_idempotent_per_path() {
        let mut reg = TextureRegistry::new();
        let sun = reg.register("planets/sun.png");
        let earth = reg.register("planets/earth.png");
        assert_ne!(sun, earth);
        assert_eq!(reg.register("planets/sun.png"), sun);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.path(earth), Some("planets/earth.png"));
    }

    #[test]
    fn sprite_for_unknown_path_fails() {
        let mut reg = TextureRegistry::new();
        reg.register("planets/mars.png");
        let sprite = reg.sprite("planets/mars.png").unwrap();
        assert_eq!(sprite.alpha, 1.0);
        assert!(sprite.size.is_none());
        assert!(matches!(
            reg.sprite("planets/vulcan.png"),
            Err(EngineError::UnknownTexture(_))
        ));
    }

    #[test]
    fn iter_follows_registration_order() {
        let mut reg = TextureRegistry::new();
        reg.register("a.png");
        reg.register("b.png");
        let paths: Vec<&str> = reg.iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["a.png", "b.png"]);
    }
}
