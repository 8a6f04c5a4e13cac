//! Static body catalog, one entry table per scale profile.
//!
//! Eccentricity, inclination, and axial tilt are dimensionless/angular and
//! shared between profiles; radii, distances, and rate coefficients are in
//! profile units.

use crate::body::{Body, CelestialBody, RingGeometry};
use crate::info::{self, BodyInfo};
use crate::profile::{ScaleConfig, ScaleProfile};
use thiserror::Error;

/// Errors surfaced by name-based catalog access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no body named `{0}` in the catalog")]
    NotFound(String),
}

/// Immutable table of body parameters, loaded once at startup.
pub struct BodyCatalog {
    profile: ScaleProfile,
    entries: Vec<CelestialBody>,
}

impl BodyCatalog {
    pub fn new(profile: ScaleProfile) -> Self {
        let entries = match profile {
            ScaleProfile::Stylized => stylized_entries(),
            ScaleProfile::Realistic => realistic_entries(),
        };
        debug_assert_eq!(entries.len(), Body::COUNT);
        Self { profile, entries }
    }

    pub fn profile(&self) -> ScaleProfile {
        self.profile
    }

    pub fn scale(&self) -> &'static ScaleConfig {
        self.profile.config()
    }

    /// Typed access never fails: every `Body` has exactly one entry.
    pub fn get(&self, body: Body) -> &CelestialBody {
        &self.entries[body.index()]
    }

    /// Name-based access for external callers (focus/info lookup).
    pub fn lookup(&self, name: &str) -> Result<&CelestialBody, CatalogError> {
        Body::from_name(name)
            .map(|b| self.get(b))
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    /// Descriptive record for the info panel.
    pub fn info(&self, name: &str) -> Result<&'static BodyInfo, CatalogError> {
        Body::from_name(name)
            .map(info::for_body)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    body: Body,
    radius: f64,
    distance: f64,
    eccentricity: f64,
    inclination: f64,
    axial_tilt: f64,
    orbit_rate: f64,
    spin_rate: f64,
    ring: Option<RingGeometry>,
) -> CelestialBody {
    CelestialBody {
        body,
        radius,
        distance,
        eccentricity,
        inclination,
        axial_tilt,
        orbit_rate,
        spin_rate,
        ring,
        initial_angle: 0.0,
    }
}

/// Stylized profile: display units chosen so every body stays visible.
fn stylized_entries() -> Vec<CelestialBody> {
    vec![
        entry(Body::Sun, 15.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.004, None),
        entry(Body::Mercury, 3.2, 28.0, 0.2056, 7.0, 0.034, 0.004, 0.004, None),
        entry(Body::Venus, 5.8, 44.0, 0.0067, 3.39, 177.4, 0.015, -0.002, None),
        entry(Body::Earth, 6.0, 62.0, 0.0167, 0.0, 23.44, 0.01, 0.02, None),
        entry(Body::Mars, 4.0, 78.0, 0.0935, 1.85, 25.19, 0.008, 0.018, None),
        entry(Body::Jupiter, 12.0, 100.0, 0.0489, 1.31, 3.13, 0.002, 0.04, None),
        entry(
            Body::Saturn,
            10.0,
            138.0,
            0.0565,
            2.49,
            26.73,
            0.0009,
            0.038,
            Some(RingGeometry {
                inner_radius: 10.0,
                outer_radius: 20.0,
                texture: "saturn_ring",
                tilt: 0.0,
            }),
        ),
        entry(
            Body::Uranus,
            7.0,
            176.0,
            0.0457,
            0.77,
            97.77,
            0.0004,
            0.03,
            Some(RingGeometry {
                inner_radius: 7.0,
                outer_radius: 12.0,
                texture: "uranus_ring",
                tilt: 45.0,
            }),
        ),
        entry(Body::Neptune, 7.0, 200.0, 0.0113, 1.77, 28.32, 0.0001, 0.032, None),
        entry(Body::Pluto, 2.8, 216.0, 0.2488, 17.16, 122.53, 0.00007, 0.008, None),
    ]
}

/// Realistic profile: radii in 10³ km, distances in 10⁶ km.
/// Rate coefficients derived from real year/day lengths.
fn realistic_entries() -> Vec<CelestialBody> {
    vec![
        entry(Body::Sun, 696.34, 0.0, 0.0, 0.0, 0.0, 0.0, 0.04, None),
        entry(Body::Mercury, 2.4397, 57.9, 0.2056, 7.0, 0.034, 0.00043, 0.01083, None),
        entry(Body::Venus, 6.0518, 108.2, 0.0067, 3.39, 177.4, 0.00035, -0.24302, None),
        entry(Body::Earth, 6.371, 149.6, 0.0167, 0.0, 23.44, 0.00029, 1.0, None),
        entry(Body::Mars, 3.3895, 227.9, 0.0935, 1.85, 25.19, 0.00024, 1.03, None),
        entry(Body::Jupiter, 69.911, 778.3, 0.0489, 1.31, 3.13, 0.00002, 0.04, None),
        entry(
            Body::Saturn,
            58.232,
            1427.0,
            0.0565,
            2.49,
            26.73,
            0.000009,
            0.038,
            Some(RingGeometry {
                inner_radius: 74.658,
                outer_radius: 136.78,
                texture: "saturn_ring",
                tilt: 0.0,
            }),
        ),
        entry(
            Body::Uranus,
            25.362,
            2870.0,
            0.0457,
            0.77,
            97.77,
            0.000004,
            0.03,
            Some(RingGeometry {
                inner_radius: 38.226,
                outer_radius: 51.149,
                texture: "uranus_ring",
                tilt: 45.0,
            }),
        ),
        entry(Body::Neptune, 24.622, 4496.0, 0.0113, 1.77, 28.32, 0.000001, 0.032, None),
        entry(Body::Pluto, 1.186, 5906.0, 0.2488, 17.16, 122.53, 0.000007, 0.008, None),
    ]
}
