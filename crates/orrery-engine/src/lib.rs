pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{AppConfig, EngineContext, Game, InfoError};
pub use api::types::{EntityId, GameEvent};
pub use assets::manifest::TextureManifest;
pub use assets::registry::{TextureRegistry, TextureSlot};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::visual::{GlowVisual, Label, Material, Rgb, RingVisual, SphereVisual};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, OrbitCamera};
pub use renderer::instance::{LabelInstance, RenderBuffer, RenderInstance};
pub use systems::lighting::{LightState, PointLight};
pub use systems::paths::{PathBuffer, PathVertex};
pub use systems::render::build_render_buffer;
pub use systems::stars::{StarField, StarPoint};
