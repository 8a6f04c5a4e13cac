use serde::Serialize;

/// Identifier for one celestial body.
///
/// The set is fixed for a session. Using an enum instead of string keys
/// makes a misspelled body name a compile error rather than a silent miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const COUNT: usize = 10;

    /// All bodies, Sun first. Catalog entries follow this order.
    pub const ALL: [Body; Self::COUNT] = [
        Self::Sun,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    /// Lookup key, matching texture and info-record names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// Capitalized name for labels and the info panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Parse a body from its lookup key (case-insensitive).
    pub fn from_name(name: &str) -> Option<Body> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Stable index into catalog/state arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The central body sits at the origin and never receives a position update.
    pub fn is_central(&self) -> bool {
        matches!(self, Self::Sun)
    }

    /// Orbiting bodies only (everything but the Sun).
    pub fn planets() -> &'static [Body] {
        &Self::ALL[1..]
    }
}

/// Ring geometry, rigidly attached to its owning body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Texture name resolved by the asset registry.
    pub texture: &'static str,
    /// Extra tilt of the ring plane in degrees, beyond the body's axial tilt.
    /// Nonzero only for Uranus, whose rings are modeled independently.
    pub tilt: f64,
}

/// Static parameters for one body, in the units of the owning scale profile.
///
/// Stylized profile: display units. Realistic profile: radius in 10³ km,
/// distance in 10⁶ km, rates derived from real day/year lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub body: Body,
    /// Body radius. Always positive.
    pub radius: f64,
    /// Distance from the central body. Zero only for the Sun.
    pub distance: f64,
    /// Orbit shape parameter in [0, 1); 0 is a circle.
    pub eccentricity: f64,
    /// Orbital inclination in degrees. Carried as data; the position model
    /// keeps all orbits in one shared plane.
    pub inclination: f64,
    /// Axial tilt in degrees, applied to the spin axis by the renderer.
    pub axial_tilt: f64,
    /// Orbital angle advanced per unit of global speed × time scale.
    pub orbit_rate: f64,
    /// Spin angle advanced per unit of global speed × time scale.
    /// Negative for retrograde rotators (Venus).
    pub spin_rate: f64,
    /// Ring geometry for ringed bodies.
    pub ring: Option<RingGeometry>,
    /// Orbital angle at creation.
    pub initial_angle: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_round_trip() {
        for body in Body::ALL {
            assert_eq!(Body::from_name(body.name()), Some(body));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Body::from_name("Earth"), Some(Body::Earth));
        assert_eq!(Body::from_name("SATURN"), Some(Body::Saturn));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Body::from_name("krypton"), None);
    }

    #[test]
    fn indices_match_all_order() {
        for (i, body) in Body::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
        }
    }

    #[test]
    fn only_sun_is_central() {
        assert!(Body::Sun.is_central());
        for body in Body::planets() {
            assert!(!body.is_central(), "{} should orbit", body.name());
        }
        assert_eq!(Body::planets().len(), Body::COUNT - 1);
    }
}
