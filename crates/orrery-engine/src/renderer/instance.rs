use bytemuck::{Pod, Zeroable};

/// Per-sprite render data written to the shared buffer for the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position (sprite center) in world space.
    pub x: f32,
    /// Y position (sprite center) in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Texture index from the asset manifest.
    pub texture: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Explicit world width, or 0.0 for native texture width.
    pub width: f32,
    /// Explicit world height, or 0.0 for native texture height.
    pub height: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sprite instances for one frame, in draw order.
pub struct RenderBuffer {
    /// Background instances first, then Bodies instances from `layer_split`.
    pub instances: Vec<RenderInstance>,
    /// Index of the first instance drawn above the vector layer.
    pub layer_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            layer_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.layer_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn set_layer_split(&mut self, split: u32) {
        self.layer_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        let inst = RenderInstance {
            x: 1.0,
            texture: 3.0,
            ..Default::default()
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(floats.len(), RenderInstance::FLOATS);
        assert_eq!(floats[4], 3.0);
    }

    #[test]
    fn clear_resets_split() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::default());
        buf.set_layer_split(1);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.layer_split, 0);
    }
}
