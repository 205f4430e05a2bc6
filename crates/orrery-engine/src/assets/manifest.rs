use serde::{Deserialize, Serialize};
use crate::assets::registry::TextureRegistry;
use crate::error::{EngineError, EngineResult};

/// Texture table handed to the host so it can load every asset the scene uses.
/// Serialized as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Textures indexed by `id`, which matches the sprite buffer's texture field.
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    pub id: u32,
    /// Relative path to the image file (e.g., "planets/earth.png").
    pub path: String,
}

impl AssetManifest {
    /// Snapshot the registry.
    pub fn from_registry(registry: &TextureRegistry) -> Self {
        Self {
            textures: registry
                .iter()
                .map(|(id, path)| TextureDescriptor { id: id.0, path: path.to_string() })
                .collect(),
        }
    }

    /// Parse a manifest from a JSON string. IDs must be unique.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        for (i, tex) in manifest.textures.iter().enumerate() {
            if manifest.textures[..i].iter().any(|t| t.id == tex.id) {
                return Err(EngineError::InvalidConfig(format!(
                    "duplicate texture id {} ({})",
                    tex.id, tex.path
                )));
            }
        }
        Ok(manifest)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
