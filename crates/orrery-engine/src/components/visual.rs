use crate::assets::registry::TextureSlot;
use serde::{Deserialize, Serialize};

/// Linear RGB color, each channel typically in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Surface appearance for a sphere or ring.
///
/// When `texture` is None the renderer falls back to a flat `color`;
/// a failed texture load therefore degrades to a colored body, it never
/// removes the body from the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub texture: Option<TextureSlot>,
    pub color: Rgb,
    pub emissive: f32,
    pub shininess: f32,
    pub opacity: f32,
}

impl Material {
    pub fn color(color: Rgb) -> Self {
        Self {
            texture: None,
            color,
            emissive: 0.0,
            shininess: 16.0,
            opacity: 1.0,
        }
    }

    pub fn with_texture(mut self, slot: TextureSlot) -> Self {
        self.texture = Some(slot);
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A textured or flat-colored sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereVisual {
    pub radius: f32,
    pub material: Material,
}

/// A flat annulus rigidly attached to its owning entity.
/// `tilt` is extra rotation of the ring plane in radians, applied on top
/// of the entity's axial tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingVisual {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub material: Material,
    pub tilt: f32,
}

/// Additive halo drawn around the entity (atmosphere glow).
/// Follows the entity position by construction, no separate update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowVisual {
    pub radius: f32,
    pub color: Rgb,
    pub intensity: f32,
}

/// Billboard text label hovering above the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Vertical offset above the entity center, in scene units.
    pub offset: f32,
    /// On-screen scale hint for the UI renderer.
    pub scale: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, offset: f32) -> Self {
        Self {
            text: text.into(),
            offset,
            scale: 1.0,
        }
    }
}
