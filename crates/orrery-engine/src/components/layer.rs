/// Render layer: controls draw order for sprites.
///
/// The host draws Background sprites, then the frame's vector geometry,
/// then Bodies sprites. Within a layer, spawn order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Bodies = 1,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 2;

    /// Whether sprites on this layer are drawn before vector geometry.
    pub fn below_vectors(self) -> bool {
        self == Self::Background
    }
}
