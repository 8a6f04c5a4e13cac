use bytemuck::{Pod, Zeroable};
use crate::components::visual::Rgb;
use glam::Vec3;

/// One vertex of a line-list path, written to the SAB for the renderer.
///
/// Wire format (7 floats / 28 bytes): `[x, y, z, r, g, b, a]`.
/// Vertices are consumed in pairs, two per line segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PathVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl PathVertex {
    pub const FLOATS: usize = 7;

    fn new(pos: Vec3, color: Rgb, alpha: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            a: alpha,
        }
    }
}

/// Per-frame buffer of line segments (orbit paths and similar overlays).
/// Cleared at the start of every frame by `EngineContext::clear_frame_data`.
pub struct PathBuffer {
    vertices: Vec<PathVertex>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Add a single line segment.
    pub fn add_segment(&mut self, a: Vec3, b: Vec3, color: Rgb, alpha: f32) {
        self.vertices.push(PathVertex::new(a, color, alpha));
        self.vertices.push(PathVertex::new(b, color, alpha));
    }

    /// Add a polyline through the given points. When `closed`, the last
    /// point connects back to the first.
    pub fn add_polyline(&mut self, points: &[Vec3], color: Rgb, alpha: f32, closed: bool) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.add_segment(pair[0], pair[1], color, alpha);
        }
        if closed {
            self.add_segment(points[points.len() - 1], points[0], color, alpha);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw pointer to vertex data for SharedArrayBuffer reads.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new()
    }
}
