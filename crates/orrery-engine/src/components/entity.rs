use crate::api::types::EntityId;
use crate::components::visual::{GlowVisual, Label, RingVisual, SphereVisual};
use glam::Vec3;

/// Fat Entity — a single struct with optional visual components.
/// Designed for simplicity over ECS purity; the scene holds tens of these.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in scene space.
    pub pos: Vec3,
    /// Accumulated rotation about the local vertical axis, radians.
    pub spin: f32,
    /// Fixed axial tilt in radians. Rings add their own tilt on top.
    pub tilt: f32,
    /// Sphere body (optional — entities without one are invisible).
    pub sphere: Option<SphereVisual>,
    /// Ring annulus, rigidly attached.
    pub ring: Option<RingVisual>,
    /// Atmosphere glow halo.
    pub glow: Option<GlowVisual>,
    /// Billboard text label.
    pub label: Option<Label>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            spin: 0.0,
            tilt: 0.0,
            sphere: None,
            ring: None,
            glow: None,
            label: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_sphere(mut self, sphere: SphereVisual) -> Self {
        self.sphere = Some(sphere);
        self
    }

    pub fn with_ring(mut self, ring: RingVisual) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn with_glow(mut self, glow: GlowVisual) -> Self {
        self.glow = Some(glow);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }
}
