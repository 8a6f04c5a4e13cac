use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Orbiting perspective camera: yaw/pitch/distance around a focus point.
/// Pointer drags steer target angles; `update` eases the actual angles
/// toward them each frame for smoothed rotation.
pub struct OrbitCamera {
    /// Current yaw in radians (around the world Y axis).
    pub yaw: f32,
    /// Current pitch in radians, clamped short of the poles.
    pub pitch: f32,
    /// Distance from the focus point.
    pub distance: f32,
    /// Point the camera orbits and looks at.
    pub focus: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,

    target_yaw: f32,
    target_pitch: f32,
    near: f32,
    far: f32,
    min_distance: f32,
    max_distance: f32,
    /// Rotation smoothing factor (0.0 = instant, toward 1.0 = slower).
    smoothing: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.5,
            distance: 240.0,
            focus: Vec3::ZERO,
            fov_y: 45f32.to_radians(),
            aspect: 16.0 / 9.0,
            target_yaw: 0.0,
            target_pitch: 0.5,
            near: 0.1,
            far: 1000.0,
            min_distance: 1.0,
            max_distance: 1000.0,
            smoothing: 0.85,
        }
    }

    /// Set the view range: far plane and zoom ceiling together.
    pub fn set_max_view(&mut self, max_view: f32) {
        self.far = max_view;
        self.max_distance = max_view;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Jump to a distance, clamped to the zoom range.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Set smoothing factor for rotation. 0.0 snaps instantly.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    /// Steer the target angles (pointer drag).
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.target_yaw += delta_yaw;
        self.target_pitch = (self.target_pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Multiplicative zoom. `factor > 1` moves the camera out.
    pub fn zoom(&mut self, factor: f32) {
        if factor > 0.0 {
            self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        }
    }

    /// Point the camera at a new focus target.
    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }

    /// Snap angles, focus, and distance back to a home view.
    pub fn reset(&mut self, distance: f32) {
        self.target_yaw = 0.0;
        self.target_pitch = 0.5;
        self.yaw = 0.0;
        self.pitch = 0.5;
        self.focus = Vec3::ZERO;
        self.set_distance(distance);
    }

    /// Ease current angles toward the targets.
    pub fn update(&mut self, dt: f32) {
        if self.smoothing <= 0.0 {
            self.yaw = self.target_yaw;
            self.pitch = self.target_pitch;
        } else {
            let lerp_factor = 1.0 - self.smoothing.powf(dt * 60.0);
            self.yaw += (self.target_yaw - self.yaw) * lerp_factor;
            self.pitch += (self.target_pitch - self.pitch) * lerp_factor;
        }
    }

    /// Camera position in scene space.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.focus, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        let view_proj = self.projection_matrix() * self.view_matrix();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            eye: self.eye().to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
