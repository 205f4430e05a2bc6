use orrery_engine::{
    build_render_buffer, AssetManifest, DrawContext, EngineContext, EngineResult, FrameClock,
    FrameCounts, Game, GameConfig, InputEvent, InputQueue, ProtocolLayout, RenderBuffer,
    VectorState, HEADER_FLOATS,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    vectors: VectorState,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    initialized: bool,
    /// Set once a capacity overflow has been reported, to avoid log spam.
    overflow_warned: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            vectors: VectorState::new(),
            clock: FrameClock::new(config.max_frame_dt),
            layout,
            config,
            header: [0.0; HEADER_FLOATS],
            initialized: false,
            overflow_warned: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.clock = FrameClock::new(self.config.max_frame_dt);
        self.ctx = EngineContext::new();
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_frame();
        log::info!(
            "{}: {} entities, {} textures",
            self.config.title,
            self.ctx.scene.len(),
            self.ctx.textures.len()
        );
    }

    /// Apply a JSON settings document and rebuild the scene from scratch.
    /// On error nothing changes.
    pub fn configure(&mut self, json: &str) -> EngineResult<()> {
        self.game.configure(json)?;
        if self.initialized {
            self.input.drain();
            self.init();
        }
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game, then rebuild sprite and vector buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let dt = self.clock.advance(dt);
        self.game.update(&mut self.ctx, &self.input, dt);

        // Drain input after update
        self.input.drain();

        self.rebuild_frame();
    }

    /// Tear down the scene. Further ticks are ignored until `init`.
    pub fn shutdown(&mut self) {
        self.initialized = false;
        self.input.drain();
        self.ctx = EngineContext::new();
        self.render_buffer.clear();
        self.vectors.clear();
        log::info!(
            "{}: shut down after {} frames ({:.1} s simulated)",
            self.config.title,
            self.clock.frames(),
            self.clock.elapsed()
        );
    }

    fn rebuild_frame(&mut self) {
        self.vectors.clear();
        {
            let mut draw_ctx = DrawContext {
                vectors: &mut self.vectors,
            };
            self.game.draw(&mut draw_ctx);
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        let counts = FrameCounts {
            frame: self.clock.frames(),
            instances: self.render_buffer.instances.len(),
            layer_split: self.render_buffer.layer_split as usize,
            vector_vertices: self.vectors.vertex_count(),
            events: self.ctx.events.len(),
        };
        self.warn_on_overflow(&counts);
        self.layout.write_header(
            &mut self.header,
            &counts,
            (self.config.world_width, self.config.world_height),
        );
    }

    fn warn_on_overflow(&mut self, counts: &FrameCounts) {
        let overflow = counts.instances > self.layout.max_instances
            || counts.vector_vertices > self.layout.max_vector_vertices
            || counts.events > self.layout.max_events;
        if overflow && !self.overflow_warned {
            log::warn!(
                "frame exceeds buffer capacity (instances {}/{}, vertices {}/{}, events {}/{}); truncating",
                counts.instances,
                self.layout.max_instances,
                counts.vector_vertices,
                self.layout.max_vector_vertices,
                counts.events,
                self.layout.max_events,
            );
            self.overflow_warned = true;
        }
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count().min(self.layout.max_instances as u32)
    }

    pub fn layer_split(&self) -> u32 {
        self.render_buffer.layer_split.min(self.instance_count())
    }

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count().min(self.layout.max_vector_vertices) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn texture_manifest_json(&self) -> EngineResult<String> {
        AssetManifest::from_registry(&self.ctx.textures).to_json()
    }

    pub fn title(&self) -> String {
        self.config.title.clone()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    /// Read-only access to the engine state, for tests and tooling.
    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use orrery_engine::bridge::protocol::{HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_LAYER_SPLIT};
    use orrery_engine::{EngineError, Entity, GameEvent, RenderLayer, SpriteComponent, VectorColor};

    /// A single body on a circular outline; zoom follows the wheel.
    struct RingGame {
        radius: f32,
        zoom: f32,
        updates: u32,
        max_instances: usize,
    }

    impl RingGame {
        fn new() -> Self {
            Self { radius: 50.0, zoom: 1.0, updates: 0, max_instances: 64 }
        }
    }

    impl Game for RingGame {
        fn config(&self) -> GameConfig {
            GameConfig {
                title: "ring".into(),
                max_instances: self.max_instances,
                ..GameConfig::default()
            }
        }

        fn configure(&mut self, json: &str) -> EngineResult<()> {
            let radius: f32 = parse_radius(json)?;
            self.radius = radius;
            Ok(())
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let bg = ctx.textures.register("bg.png");
            let ball = ctx.textures.register("ball.png");
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_layer(RenderLayer::Background)
                    .with_sprite(SpriteComponent::new(bg)),
            );
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("ball")
                    .with_pos(Vec2::new(self.radius, 0.0))
                    .with_sprite(SpriteComponent::new(ball)),
            );
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, _dt: f32) {
            self.updates += 1;
            for delta in input.scroll_deltas() {
                self.zoom += delta * 0.1;
                ctx.emit_event(GameEvent { kind: 1.0, a: self.zoom, b: 0.0, c: 0.0 });
            }
        }

        fn draw(&self, ctx: &mut DrawContext) {
            ctx.vectors.stroke_ellipse(
                Vec2::ZERO,
                Vec2::splat(self.radius * self.zoom),
                1.0,
                VectorColor::DARK_GRAY,
            );
        }
    }

    fn parse_radius(json: &str) -> EngineResult<f32> {
        let radius: f32 = json
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidConfig(format!("not a radius: {json}")))?;
        Ok(radius)
    }

    fn scroll(scroll_y: f32) -> InputEvent {
        InputEvent::Scroll { x: 0.0, y: 0.0, scroll_x: 0.0, scroll_y }
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = GameRunner::new(RingGame::new());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game.updates, 0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn init_builds_first_frame() {
        let mut runner = GameRunner::new(RingGame::new());
        runner.init();
        assert_eq!(runner.instance_count(), 2);
        assert_eq!(runner.layer_split(), 1);
        assert!(runner.vector_vertex_count() > 0);
        assert_eq!(runner.header()[HEADER_INSTANCE_COUNT], 2.0);
        assert_eq!(runner.header()[HEADER_LAYER_SPLIT], 1.0);
        assert_eq!(runner.title(), "ring");
    }

    #[test]
    fn scroll_reaches_update_and_is_drained() {
        let mut runner = GameRunner::new(RingGame::new());
        runner.init();
        runner.push_input(scroll(1.0));
        runner.push_input(scroll(1.0));
        runner.tick(1.0 / 60.0);
        assert!((runner.game.zoom - 1.2).abs() < 1e-5);
        assert_eq!(runner.game_events_len(), 2);

        runner.tick(1.0 / 60.0);
        assert!((runner.game.zoom - 1.2).abs() < 1e-5);
        assert_eq!(runner.game_events_len(), 0);
        assert_eq!(runner.header()[HEADER_FRAME_COUNTER], 2.0);
    }

    #[test]
    fn texture_manifest_lists_registered_paths() {
        let mut runner = GameRunner::new(RingGame::new());
        runner.init();
        let manifest = AssetManifest::from_json(&runner.texture_manifest_json().unwrap()).unwrap();
        let paths: Vec<&str> = manifest.textures.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, vec!["bg.png", "ball.png"]);
    }

    #[test]
    fn configure_reinitializes_or_keeps_state_on_error() {
        let mut runner = GameRunner::new(RingGame::new());
        runner.init();

        assert!(runner.configure("not json at all").is_err());
        assert_eq!(runner.game.radius, 50.0);

        runner.configure("80").unwrap();
        let ball = runner.context().scene.find_by_tag("ball").unwrap();
        assert_eq!(ball.pos.x, 80.0);
        assert_eq!(runner.context().scene.len(), 2);
    }

    #[test]
    fn counts_are_truncated_to_capacity() {
        let mut game = RingGame::new();
        game.max_instances = 1;
        let mut runner = GameRunner::new(game);
        runner.init();
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.layer_split(), 1);
    }

    #[test]
    fn shutdown_stops_ticking() {
        let mut runner = GameRunner::new(RingGame::new());
        runner.init();
        runner.shutdown();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game.updates, 0);
        assert_eq!(runner.instance_count(), 0);
        assert!(runner.context().scene.is_empty());
    }
}
