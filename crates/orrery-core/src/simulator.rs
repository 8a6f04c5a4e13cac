//! Per-frame orbital update.
//!
//! Each body moves on an ellipse centered at the origin, major axis along x,
//! in the shared y = 0 plane. The per-frame angular step is the product of
//! the global speed, the body's rate coefficient, the profile's rate scale,
//! and the time-scale multiplier. All math is f64; conversion to f32 happens
//! at the scene-application step.

use crate::body::{Body, CelestialBody};
use crate::catalog::BodyCatalog;
use crate::profile::{ScaleConfig, ScaleProfile};
use glam::DVec3;
use std::f64::consts::TAU;

/// Mutable simulation state: one orbital angle per body, owned by the caller.
///
/// Angles accumulate without wraparound so that stepping by Δ then -Δ
/// restores the exact starting value; use [`OrbitState::normalized_angle`]
/// where a value in [0, 2π) is wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    angles: [f64; Body::COUNT],
}

impl OrbitState {
    /// Seed every body at its catalog initial angle.
    pub fn new(catalog: &BodyCatalog) -> Self {
        let mut angles = [0.0; Body::COUNT];
        for e in catalog.iter() {
            angles[e.body.index()] = e.initial_angle;
        }
        Self { angles }
    }

    /// Seed bodies at deterministic pseudo-random angles (no rand crate).
    pub fn randomized(catalog: &BodyCatalog, seed: u32) -> Self {
        let mut state = Self::new(catalog);
        for body in Body::planets() {
            let h = mix(seed.wrapping_add(body.index() as u32 * 7 + 31));
            state.angles[body.index()] = (h as f64 / u32::MAX as f64) * TAU;
        }
        state
    }

    pub fn angle(&self, body: Body) -> f64 {
        self.angles[body.index()]
    }

    pub fn set_angle(&mut self, body: Body, angle: f64) {
        self.angles[body.index()] = angle;
    }

    /// Current angle reduced to [0, 2π).
    pub fn normalized_angle(&self, body: Body) -> f64 {
        self.angles[body.index()].rem_euclid(TAU)
    }
}

/// Frame output for one body: where it is, and how much it spun this step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub body: Body,
    /// Position in scene units. Always the origin for the central body.
    pub position: DVec3,
    /// Incremental rotation about the body's local vertical axis, radians.
    /// The renderer accumulates this; the simulator never holds an absolute
    /// orientation.
    pub spin_delta: f64,
}

/// Deterministic integer mix for seeding (splitmix-style avalanche).
fn mix(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Advances orbital angles and produces positions and spin deltas.
///
/// Pure arithmetic over catalog-valid state: no validation, no failure
/// states. Negative speed runs the simulation backward.
pub struct OrbitSimulator {
    scale: &'static ScaleConfig,
}

impl OrbitSimulator {
    pub fn new(profile: ScaleProfile) -> Self {
        Self {
            scale: profile.config(),
        }
    }

    pub fn scale(&self) -> &'static ScaleConfig {
        self.scale
    }

    /// Angular step for one body at the given speed and time scale.
    pub fn orbit_step(&self, entry: &CelestialBody, speed: f64, time_scale: f64) -> f64 {
        speed * entry.orbit_rate * self.scale.orbit_rate_scale * time_scale
    }

    /// Spin increment for one body at the given speed and time scale.
    pub fn spin_step(&self, entry: &CelestialBody, speed: f64, time_scale: f64) -> f64 {
        speed * entry.spin_rate * self.scale.self_rotate_scale * time_scale
    }

    /// Advance every orbiting body's angle by one frame.
    /// The central body has no orbital angle to advance.
    pub fn advance(
        &self,
        catalog: &BodyCatalog,
        state: &mut OrbitState,
        speed: f64,
        time_scale: f64,
    ) {
        for e in catalog.iter() {
            if e.body.is_central() {
                continue;
            }
            let step = self.orbit_step(e, speed, time_scale);
            state.angles[e.body.index()] += step;
        }
    }

    /// Semi-major and semi-minor axes of a body's orbit in scene units.
    /// Equal exactly when eccentricity is zero.
    pub fn semi_axes(&self, entry: &CelestialBody) -> (f64, f64) {
        let semi_major = self.scale.distance_scale * entry.distance;
        let semi_minor = semi_major * (1.0 - entry.eccentricity * entry.eccentricity).sqrt();
        (semi_major, semi_minor)
    }

    /// Elliptical position at a given orbital angle.
    pub fn position(&self, entry: &CelestialBody, angle: f64) -> DVec3 {
        let (semi_major, semi_minor) = self.semi_axes(entry);
        DVec3::new(semi_major * angle.cos(), 0.0, semi_minor * angle.sin())
    }

    /// Position and spin delta for one body at the current state.
    pub fn frame(
        &self,
        catalog: &BodyCatalog,
        state: &OrbitState,
        body: Body,
        speed: f64,
        time_scale: f64,
    ) -> BodyFrame {
        let entry = catalog.get(body);
        let position = if body.is_central() {
            DVec3::ZERO
        } else {
            self.position(entry, state.angle(body))
        };
        BodyFrame {
            body,
            position,
            spin_delta: self.spin_step(entry, speed, time_scale),
        }
    }

    /// Sample a body's orbit as a closed polyline for path drawing.
    /// Returns `samples` points; the caller closes the loop.
    pub fn orbit_path(&self, entry: &CelestialBody, samples: usize) -> Vec<DVec3> {
        let mut points = Vec::with_capacity(samples);
        for i in 0..samples {
            let angle = (i as f64 / samples as f64) * TAU;
            points.push(self.position(entry, angle));
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stylized() -> (BodyCatalog, OrbitSimulator) {
        (
            BodyCatalog::new(ScaleProfile::Stylized),
            OrbitSimulator::new(ScaleProfile::Stylized),
        )
    }

    fn test_body(distance: f64, eccentricity: f64, orbit_rate: f64) -> CelestialBody {
        CelestialBody {
            body: Body::Earth,
            radius: 1.0,
            distance,
            eccentricity,
            inclination: 0.0,
            axial_tilt: 0.0,
            orbit_rate,
            spin_rate: 0.0,
            ring: None,
            initial_angle: 0.0,
        }
    }

    #[test]
    fn circular_orbit_at_angle_zero() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(100.0, 0.0, 0.001);
        let pos = sim.position(&b, 0.0);
        assert_eq!(pos, DVec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn circular_orbit_quarter_turn() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(100.0, 0.0, 0.001);
        let pos = sim.position(&b, std::f64::consts::FRAC_PI_2);
        assert!(pos.x.abs() < 1e-9);
        assert_eq!(pos.y, 0.0);
        assert!((pos.z - 100.0).abs() < 1e-9);
    }

    #[test]
    fn circular_orbit_has_constant_radius() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(62.0, 0.0, 0.01);
        for i in 0..64 {
            let angle = i as f64 * 0.37;
            let pos = sim.position(&b, angle);
            assert!(
                (pos.length() - 62.0).abs() < 1e-9,
                "radius drifted at angle {angle}: {}",
                pos.length()
            );
        }
    }

    #[test]
    fn eccentric_orbit_semi_minor() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(100.0, 0.6, 0.001);
        let (major, minor) = sim.semi_axes(&b);
        assert_eq!(major, 100.0);
        assert!((minor - 80.0).abs() < 1e-12);

        let pos = sim.position(&b, std::f64::consts::FRAC_PI_2);
        assert!(pos.x.abs() < 1e-9);
        assert!((pos.z - 80.0).abs() < 1e-9);
    }

    #[test]
    fn semi_minor_never_exceeds_semi_major() {
        for profile in [ScaleProfile::Stylized, ScaleProfile::Realistic] {
            let catalog = BodyCatalog::new(profile);
            let sim = OrbitSimulator::new(profile);
            for e in catalog.iter() {
                let (major, minor) = sim.semi_axes(e);
                assert!(minor <= major, "{}: {minor} > {major}", e.body.name());
                if e.eccentricity == 0.0 {
                    assert_eq!(minor, major, "{}: circle must be exact", e.body.name());
                } else {
                    assert!(minor < major, "{}", e.body.name());
                }
            }
        }
    }

    #[test]
    fn advance_is_reversible() {
        let (catalog, sim) = stylized();
        let mut state = OrbitState::randomized(&catalog, 42);
        let before = state.clone();

        sim.advance(&catalog, &mut state, 7.5, 1.0);
        sim.advance(&catalog, &mut state, -7.5, 1.0);

        for body in Body::ALL {
            assert!(
                (state.angle(body) - before.angle(body)).abs() < 1e-12,
                "{} did not return to its starting angle",
                body.name()
            );
        }
    }

    #[test]
    fn zero_speed_freezes_everything() {
        let (catalog, sim) = stylized();
        let mut state = OrbitState::randomized(&catalog, 7);
        let before = state.clone();

        for _ in 0..1000 {
            sim.advance(&catalog, &mut state, 0.0, 1.0);
        }

        assert_eq!(state, before);
        for body in Body::ALL {
            let frame = sim.frame(&catalog, &state, body, 0.0, 1.0);
            assert_eq!(frame.spin_delta, 0.0);
            assert_eq!(
                frame.position,
                sim.frame(&catalog, &before, body, 0.0, 1.0).position
            );
        }
    }

    #[test]
    fn negative_speed_steps_backward() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(100.0, 0.0, 0.001);
        let step = sim.orbit_step(&b, -10.0, 1.0);
        assert_eq!(step, -10.0 * 0.001);
        assert!((step + 0.01).abs() < 1e-15);
    }

    #[test]
    fn zero_orbit_rate_freezes_position_but_not_spin() {
        let (catalog, sim) = stylized();
        let mut entry = test_body(50.0, 0.0, 0.0);
        entry.spin_rate = 0.02;

        let mut angle = 1.25;
        let step = sim.orbit_step(&entry, 10.0, 1.0);
        angle += step;
        assert_eq!(angle, 1.25);
        assert!(sim.spin_step(&entry, 10.0, 1.0) > 0.0);

        // Keep the catalog in scope to mirror real call sites.
        let _ = catalog;
    }

    #[test]
    fn central_body_never_moves() {
        let (catalog, sim) = stylized();
        let mut state = OrbitState::new(&catalog);
        for speed in [-2.0, 0.0, 20.0] {
            for _ in 0..100 {
                sim.advance(&catalog, &mut state, speed, 1.0);
            }
            let frame = sim.frame(&catalog, &state, Body::Sun, speed, 1.0);
            assert_eq!(frame.position, DVec3::ZERO);
        }
    }

    #[test]
    fn central_body_still_spins() {
        let (catalog, sim) = stylized();
        let state = OrbitState::new(&catalog);
        let frame = sim.frame(&catalog, &state, Body::Sun, 5.0, 1.0);
        assert!(frame.spin_delta > 0.0);
    }

    #[test]
    fn time_scale_multiplies_the_step() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(100.0, 0.0, 0.001);
        let one = sim.orbit_step(&b, 4.0, 1.0);
        let three = sim.orbit_step(&b, 4.0, 3.0);
        assert!((three - 3.0 * one).abs() < 1e-15);
    }

    #[test]
    fn randomized_seeding_is_deterministic_and_in_range() {
        let catalog = BodyCatalog::new(ScaleProfile::Stylized);
        let a = OrbitState::randomized(&catalog, 99);
        let b = OrbitState::randomized(&catalog, 99);
        let c = OrbitState::randomized(&catalog, 100);
        assert_eq!(a, b);
        assert_ne!(a, c);
        for body in Body::planets() {
            let angle = a.angle(*body);
            assert!((0.0..TAU).contains(&angle), "{}: {angle}", body.name());
        }
        assert_eq!(a.angle(Body::Sun), 0.0);
    }

    #[test]
    fn normalized_angle_wraps() {
        let catalog = BodyCatalog::new(ScaleProfile::Stylized);
        let mut state = OrbitState::new(&catalog);
        state.set_angle(Body::Mercury, 3.0 * TAU + 1.0);
        assert!((state.normalized_angle(Body::Mercury) - 1.0).abs() < 1e-9);
        state.set_angle(Body::Mercury, -1.0);
        assert!((state.normalized_angle(Body::Mercury) - (TAU - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn orbit_path_points_lie_on_the_ellipse() {
        let sim = OrbitSimulator::new(ScaleProfile::Stylized);
        let b = test_body(100.0, 0.6, 0.001);
        let points = sim.orbit_path(&b, 96);
        assert_eq!(points.len(), 96);
        let (major, minor) = sim.semi_axes(&b);
        for p in points {
            let u = p.x / major;
            let v = p.z / minor;
            assert!((u * u + v * v - 1.0).abs() < 1e-9);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn realistic_profile_scales_distances() {
        let catalog = BodyCatalog::new(ScaleProfile::Realistic);
        let sim = OrbitSimulator::new(ScaleProfile::Realistic);
        let earth = catalog.get(Body::Earth);
        let (major, _) = sim.semi_axes(earth);
        assert!((major - 149.6 * 0.0001).abs() < 1e-12);
    }
}
