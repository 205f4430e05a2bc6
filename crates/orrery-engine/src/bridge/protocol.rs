/// Shared buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Sprite instances: max_instances × 8 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Draw order for the host: sprites `[0, layer_split)`, then every vector
/// vertex, then sprites `[layer_split, instance_count)`.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_LAYER_SPLIT: usize = 4;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 5;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 6;
pub const HEADER_WORLD_WIDTH: usize = 7;
pub const HEADER_WORLD_HEIGHT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sprite instance (wire format).
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per vector vertex: x, y, r, g, b, a (wire format).
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per game event: kind, a, b, c (wire format).
pub const EVENT_FLOATS: usize = 4;

/// Per-frame counts written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCounts {
    pub frame: u64,
    pub instances: usize,
    pub layer_split: usize,
    pub vector_vertices: usize,
    pub events: usize,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_vector_vertices: usize,
    pub max_events: usize,

    pub instance_data_floats: usize,
    pub vector_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where sprite instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where vector vertex data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_vector_vertices: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let vector_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = vector_data_offset + vector_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_vector_vertices,
            max_events,
            instance_data_floats,
            vector_data_floats,
            event_data_floats,
            instance_data_offset,
            vector_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_vector_vertices, config.max_events)
    }

    /// Fill a header for one frame. Counts above capacity are clamped, and the
    /// layer split never exceeds the instance count.
    pub fn write_header(&self, header: &mut [f32; HEADER_FLOATS], counts: &FrameCounts, world: (f32, f32)) {
        let instances = counts.instances.min(self.max_instances);
        header[HEADER_LOCK] = 0.0;
        header[HEADER_FRAME_COUNTER] = counts.frame as f32;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = instances as f32;
        header[HEADER_LAYER_SPLIT] = counts.layer_split.min(instances) as f32;
        header[HEADER_MAX_VECTOR_VERTICES] = self.max_vector_vertices as f32;
        header[HEADER_VECTOR_VERTEX_COUNT] = counts.vector_vertices.min(self.max_vector_vertices) as f32;
        header[HEADER_WORLD_WIDTH] = world.0;
        header[HEADER_WORLD_HEIGHT] = world.1;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = counts.events.min(self.max_events) as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    }
}
