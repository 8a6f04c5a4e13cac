use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;
use crate::systems::lighting::LightState;
use crate::systems::paths::PathBuffer;
use crate::systems::stars::StarField;
use thiserror::Error;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of render instances (spheres, rings, glows).
    pub max_instances: usize,
    /// Maximum number of path line vertices per frame.
    pub max_path_vertices: usize,
    /// Maximum number of label instances per frame.
    pub max_labels: usize,
    /// Maximum number of point lights.
    pub max_lights: usize,
    /// Maximum number of background star points.
    pub max_stars: usize,
    /// Maximum number of game events per frame.
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_instances: 64,
            max_path_vertices: 4096,
            max_labels: 16,
            max_lights: 4,
            max_stars: 10_000,
            max_events: 16,
        }
    }
}

/// Errors from the name-based info lookup surface.
#[derive(Debug, Error)]
pub enum InfoError {
    #[error("unknown body: {0}")]
    UnknownBody(String),
    #[error("info serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The core contract every app must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state, spawn entities, configure lights and camera.
    /// Texture load results have already been reported when this runs.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed-step tick. Apply input, advance simulation, write the scene.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Descriptive info for a named body, serialized as JSON for the UI.
    fn body_info(&self, name: &str) -> Result<String, InfoError> {
        Err(InfoError::UnknownBody(name.to_owned()))
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub paths: PathBuffer,
    pub stars: StarField,
    pub camera: OrbitCamera,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    /// Whether label instances are emitted to the render buffer.
    pub labels_visible: bool,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            lights: LightState::new(),
            paths: PathBuffer::new(),
            stars: StarField::new(),
            camera: OrbitCamera::new(),
            textures: TextureRegistry::new(),
            events: Vec::new(),
            labels_visible: true,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, path vertices).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.paths.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
