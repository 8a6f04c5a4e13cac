use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::{
    AppConfig, CameraUniform, EngineContext, FixedTimestep, Game, InfoError, InputEvent,
    InputQueue, ProtocolLayout, RenderBuffer, TextureManifest, TextureRegistry, TextureSlot,
};

/// Generic app runner that wires up the engine loop.
///
/// The concrete app creates a `thread_local!` AppRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct AppRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: AppConfig,
    layout: ProtocolLayout,
    camera_uniform: CameraUniform,
    initialized: bool,
}

impl<G: Game> AppRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::new();
        let camera_uniform = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            config,
            layout,
            camera_uniform,
            initialized: false,
        }
    }

    /// Parse the texture manifest and install the registry.
    /// Call before init so materials resolve during entity construction.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.textures = TextureRegistry::from_manifest(&manifest);
                log::info!("texture manifest: {} entries", self.ctx.textures.len());
            }
            Err(e) => {
                log::error!("failed to parse texture manifest: {e}");
            }
        }
    }

    /// Record a texture load result reported from JS.
    pub fn texture_result(&mut self, slot: u32, ok: bool) {
        self.ctx.textures.report(TextureSlot(slot), ok);
    }

    /// JSON list of `{slot, name, path}` for the JS image loader.
    pub fn texture_requests(&self) -> String {
        self.ctx.textures.requests_json().unwrap_or_else(|e| {
            log::error!("failed to serialize texture requests: {e}");
            "[]".to_owned()
        })
    }

    /// Initialize the app. Call once, after texture results are in.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        if !self.ctx.textures.is_ready() {
            log::warn!(
                "init with {} texture results still pending",
                self.ctx.textures.pending()
            );
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Update the camera aspect ratio on viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.ctx.camera.set_aspect(aspect);
    }

    /// Run one frame tick: update app state, then build the wire buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Transient data (paths, events) is rebuilt by every step, so it is
        // cleared per step rather than per tick: a multi-step tick would
        // otherwise accumulate past the layout maxima the protocol declares.
        // The unconditional clear covers zero-step frames, which would
        // otherwise re-export the previous tick's events.
        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.ctx.clear_frame_data();
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        // Camera easing runs on frame time, not fixed steps
        self.ctx.camera.update(dt);
        self.camera_uniform = self.ctx.camera.uniform();

        // Build render buffer from entities
        build_render_buffer(
            self.ctx.scene.iter(),
            &mut self.render_buffer,
            self.ctx.labels_visible,
        );
    }

    /// Info-panel lookup, forwarded to the app.
    pub fn body_info(&self, name: &str) -> Result<String, InfoError> {
        self.game.body_info(name)
    }

    /// Label text for an entity ID, fetched lazily by the JS renderer.
    pub fn label_text(&self, id: u32) -> Option<String> {
        self.ctx
            .scene
            .get(orrery_engine::EntityId(id))
            .and_then(|e| e.label.as_ref())
            .map(|l| l.text.clone())
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.ctx.paths.vertices_ptr()
    }

    pub fn path_vertex_count(&self) -> u32 {
        self.ctx.paths.vertex_count() as u32
    }

    pub fn labels_ptr(&self) -> *const f32 {
        self.render_buffer.labels_ptr()
    }

    pub fn label_count(&self) -> u32 {
        self.render_buffer.label_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.points_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn camera_floats(&self) -> u32 {
        CameraUniform::FLOATS as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_path_vertices(&self) -> u32 {
        self.layout.max_path_vertices as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.layout.max_labels as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
