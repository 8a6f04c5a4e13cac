/// Which of the two body data sets is active.
///
/// The stylized profile exaggerates sizes and compresses distances so every
/// body stays visible; the realistic profile carries physically scaled
/// values and correspondingly wider speed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleProfile {
    #[default]
    Stylized,
    Realistic,
}

/// Scale constants and control bounds for one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    /// Multiplier applied to body radii by the renderer.
    pub size_scale: f64,
    /// Multiplier applied to orbital distances (semi-major axis).
    pub distance_scale: f64,
    /// Global multiplier on per-body orbital rates.
    pub orbit_rate_scale: f64,
    /// Global multiplier on per-body spin rates.
    pub self_rotate_scale: f64,
    /// Camera far plane / zoom ceiling in scene units.
    pub max_view: f64,
    /// Lower bound of the UI speed control. Negative runs the simulation backward.
    pub min_speed: f64,
    /// Upper bound of the UI speed control.
    pub max_speed: f64,
    /// Falloff range of the sun's point light.
    pub light_range: f64,
}

const STYLIZED: ScaleConfig = ScaleConfig {
    size_scale: 1.0,
    distance_scale: 1.0,
    orbit_rate_scale: 1.0,
    self_rotate_scale: 1.0,
    max_view: 1000.0,
    min_speed: -2.0,
    max_speed: 20.0,
    light_range: 300.0,
};

const REALISTIC: ScaleConfig = ScaleConfig {
    size_scale: 0.0005,
    distance_scale: 0.0001,
    orbit_rate_scale: 0.000075,
    self_rotate_scale: 0.01,
    max_view: 10_000_000.0,
    min_speed: -5000.0,
    max_speed: 100_000.0,
    light_range: 15_000_000.0,
};

impl ScaleProfile {
    pub fn config(&self) -> &'static ScaleConfig {
        match self {
            Self::Stylized => &STYLIZED,
            Self::Realistic => &REALISTIC,
        }
    }

    /// Clamp a requested speed to this profile's control bounds.
    /// Applied at the control surface, upstream of the simulator.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        let c = self.config();
        speed.clamp(c.min_speed, c.max_speed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stylized => "stylized",
            Self::Realistic => "realistic",
        }
    }
}
