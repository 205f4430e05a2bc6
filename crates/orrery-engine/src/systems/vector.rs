//! Lyon-based outline rendering.
//!
//! Orbit paths are tessellated on the CPU into a flat triangle-list vertex
//! buffer that the host draws between the Background and Bodies sprite layers.
//!
//! # Usage
//!
//! ```ignore
//! // In your Game::draw():
//! ctx.vectors.stroke_ellipse(
//!     Vec2::new(640.0, 360.0),
//!     Vec2::new(200.0, 130.0),
//!     1.0,
//!     VectorColor::DARK_GRAY,
//! );
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

/// Tessellation tolerance in world units. Half a pixel keeps large orbits smooth.
const TOLERANCE: f32 = 0.5;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// (169, 169, 169), the usual "dark gray" of desktop palettes.
    pub const DARK_GRAY: Self = Self::rgb(0.663, 0.663, 0.663);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// State for outline rendering.
///
/// Holds the lyon tessellator and the output vertex buffer.
/// Cleared each frame and populated by drawing commands.
pub struct VectorState {
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new() -> Self {
        Self {
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(8192 * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each draw pass.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// The flat vertex data, `FLOATS` per vertex.
    pub fn vertices(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for shared-buffer copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Stroke an axis-aligned ellipse outline with the given half-extents.
    pub fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, width: f32, color: VectorColor) {
        if !(radii.x > 0.0 && radii.y > 0.0 && width > 0.0) {
            return;
        }

        let mut builder = Path::builder();
        builder.add_ellipse(
            point(center.x, center.y),
            vector(radii.x, radii.y),
            Angle::radians(0.0),
            Winding::Positive,
        );
        let path = builder.build();

        self.stroke_path(&path, width, color);
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("stroke tessellation failed: {:?}", err);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn dark_gray_is_opaque_169() {
        let c = VectorColor::DARK_GRAY;
        assert!((c.r * 255.0 - 169.0).abs() < 0.1);
        assert_eq!((c.r, c.g), (c.b, c.b));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn stroke_ellipse_produces_triangles() {
        let mut state = VectorState::new();
        state.stroke_ellipse(Vec2::new(640.0, 360.0), Vec2::new(200.0, 130.0), 1.0, VectorColor::DARK_GRAY);
        let count = state.vertex_count();
        assert!(count > 0);
        assert_eq!(count % 3, 0);
    }

    #[test]
    fn outline_hugs_the_ellipse() {
        let mut state = VectorState::new();
        let (cx, cy, a, b) = (640.0_f32, 360.0_f32, 200.0_f32, 130.0_f32);
        state.stroke_ellipse(Vec2::new(cx, cy), Vec2::new(a, b), 1.0, VectorColor::WHITE);
        for v in state.vertices().chunks(VectorVertex::FLOATS) {
            let (dx, dy) = ((v[0] - cx) / a, (v[1] - cy) / b);
            let r = (dx * dx + dy * dy).sqrt();
            assert!((r - 1.0).abs() < 0.02, "vertex off the path: r = {r}");
        }
    }

    #[test]
    fn degenerate_ellipse_produces_nothing() {
        let mut state = VectorState::new();
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(0.0, 10.0), 1.0, VectorColor::WHITE);
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(10.0, -1.0), 1.0, VectorColor::WHITE);
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(10.0, 10.0), 0.0, VectorColor::WHITE);
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(f32::NAN, 10.0), 1.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new();
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(50.0, 20.0), 2.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
    }
}
