use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

/// One background star point.
///
/// Wire format (4 floats / 16 bytes): `[x, y, z, brightness]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub brightness: f32,
}

impl StarPoint {
    pub const FLOATS: usize = 4;
}

/// Deterministic integer mix (no rand crate).
fn star_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

fn frac(h: u32) -> f32 {
    h as f32 / u32::MAX as f32
}

/// Static point cloud of background stars, generated once at init.
/// Points are scattered through a spherical shell around the origin.
pub struct StarField {
    points: Vec<StarPoint>,
}

impl StarField {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Populate the field with `count` stars between `min_radius` and
    /// `max_radius`. Same seed, same sky.
    pub fn generate(&mut self, count: usize, min_radius: f32, max_radius: f32, seed: u32) {
        self.points.clear();
        self.points.reserve(count);
        for i in 0..count {
            let base = seed.wrapping_add(i as u32 * 4);
            let h1 = star_hash(base);
            let h2 = star_hash(base + 1);
            let h3 = star_hash(base + 2);
            let h4 = star_hash(base + 3);

            // Uniform direction: cos(theta) in [-1, 1], phi in [0, 2pi).
            let cos_theta = frac(h1) * 2.0 - 1.0;
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            let phi = frac(h2) * TAU;
            let radius = min_radius + frac(h3) * (max_radius - min_radius);

            self.points.push(StarPoint {
                x: radius * sin_theta * phi.cos(),
                y: radius * cos_theta,
                z: radius * sin_theta * phi.sin(),
                brightness: 0.3 + frac(h4) * 0.7,
            });
        }
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw pointer to star data for SharedArrayBuffer reads.
    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new()
    }
}
