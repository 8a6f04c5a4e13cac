use bytemuck::{Pod, Zeroable};

/// Per-instance render data written to SharedArrayBuffer for the JS renderer.
/// Must match the TypeScript protocol: 16 floats = 64 bytes stride.
///
/// `kind` selects the mesh: 0 = sphere, 1 = ring annulus, 2 = additive glow.
/// For spheres and glows `inner` is the radius and `outer` is unused;
/// for rings `inner`/`outer` are the annulus radii.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub kind: f32,
    /// Position in scene space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub inner: f32,
    pub outer: f32,
    /// Accumulated rotation about the local vertical axis, radians.
    pub spin: f32,
    /// Tilt of the local vertical axis, radians. Rings carry their own
    /// extra tilt folded in.
    pub tilt: f32,
    /// Texture slot index, or -1 when rendering the flat color.
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub shininess: f32,
    pub opacity: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const KIND_SPHERE: f32 = 0.0;
    pub const KIND_RING: f32 = 1.0;
    pub const KIND_GLOW: f32 = 2.0;

    /// Texture field value for "no texture, use the flat color".
    pub const NO_TEXTURE: f32 = -1.0;
}

/// Billboard label placement written alongside the instances.
///
/// Wire format (5 floats / 20 bytes): `[x, y, z, scale, id]`.
/// `id` is the owning entity's ID; JS fetches the label text by ID once
/// and caches the rendered glyph sprite.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LabelInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub scale: f32,
    pub id: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 5;
}

/// Render buffer containing all mesh instances and label placements.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    pub labels: Vec<LabelInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
            labels: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.labels.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn push_label(&mut self, label: LabelInstance) {
        self.labels.push(label);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn label_count(&self) -> u32 {
        self.labels.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Raw pointer to label data for SharedArrayBuffer reads.
    pub fn labels_ptr(&self) -> *const f32 {
        self.labels.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
