//! Descriptive records for the info panel.
//!
//! Pure display data, independent of simulation state and scale profile.

use crate::body::Body;
use serde::Serialize;

/// Human-readable facts about one body.
#[derive(Debug, Clone, Serialize)]
pub struct BodyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub radius: &'static str,
    pub distance_from_sun: &'static str,
    pub mass: &'static str,
    pub temperature_range: &'static str,
    pub day_length: &'static str,
    pub year_length: &'static str,
    pub missions: u32,
}

pub(crate) fn for_body(body: Body) -> &'static BodyInfo {
    &INFO[body.index()]
}

static INFO: [BodyInfo; Body::COUNT] = [
    BodyInfo {
        name: "Sun",
        description: "The Sun is the star at the center of our Solar System. It is a nearly perfect sphere of hot plasma, with internal convective motion that generates a magnetic field via a dynamo process.",
        radius: "696,340 km",
        distance_from_sun: "0 km",
        mass: "333,000 Earth masses",
        temperature_range: "5500°C - 15 million°C",
        day_length: "25 days (at the equator)",
        year_length: "365.25 Earth days",
        missions: 0,
    },
    BodyInfo {
        name: "Mercury",
        description: "Mercury is the smallest and innermost planet in the Solar System. It is named after the Roman deity Mercury, the messenger of the gods.",
        radius: "2439.7 km",
        distance_from_sun: "57.9 million km",
        mass: "0.330 Earth masses",
        temperature_range: "-173°C to 427°C",
        day_length: "4222.6 hours",
        year_length: "88 Earth days",
        missions: 4,
    },
    BodyInfo {
        name: "Venus",
        description: "Venus is the second planet from the Sun. It is named after the Roman goddess of love and beauty.",
        radius: "6051.8 km",
        distance_from_sun: "108.2 million km",
        mass: "4.87 Earth masses",
        temperature_range: "462°C",
        day_length: "2802 hours",
        year_length: "225 Earth days",
        missions: 43,
    },
    BodyInfo {
        name: "Earth",
        description: "Earth is the third planet from the Sun and the only astronomical object known to harbor life.",
        radius: "6371 km",
        distance_from_sun: "149.6 million km",
        mass: "1 Earth mass",
        temperature_range: "-88°C to 58°C",
        day_length: "24 hours",
        year_length: "365.25 days",
        missions: 0,
    },
    BodyInfo {
        name: "Mars",
        description: "Mars is the fourth planet from the Sun. It is often referred to as the 'Red Planet' because of its reddish appearance.",
        radius: "3389.5 km",
        distance_from_sun: "227.9 million km",
        mass: "0.107 Earth masses",
        temperature_range: "-140°C to 20°C",
        day_length: "24.6 hours",
        year_length: "687 Earth days",
        missions: 60,
    },
    BodyInfo {
        name: "Jupiter",
        description: "Jupiter is the largest planet in the Solar System. It is a gas giant with a strong magnetic field.",
        radius: "69911 km",
        distance_from_sun: "778.5 million km",
        mass: "318 Earth masses",
        temperature_range: "-145°C",
        day_length: "9.9 hours",
        year_length: "11.9 Earth years",
        missions: 9,
    },
    BodyInfo {
        name: "Saturn",
        description: "Saturn is the sixth planet from the Sun. It is known for its prominent ring system, which is made up of ice particles and dust.",
        radius: "58232 km",
        distance_from_sun: "1433.5 million km",
        mass: "95 Earth masses",
        temperature_range: "-178°C",
        day_length: "10.7 hours",
        year_length: "29.5 Earth years",
        missions: 7,
    },
    BodyInfo {
        name: "Uranus",
        description: "Uranus is the seventh planet from the Sun. It is an ice giant and is unique among the planets in the Solar System because it rotates on its side.",
        radius: "25362 km",
        distance_from_sun: "2872.5 million km",
        mass: "14 Earth masses",
        temperature_range: "-224°C",
        day_length: "17.2 hours",
        year_length: "84 Earth years",
        missions: 2,
    },
    BodyInfo {
        name: "Neptune",
        description: "Neptune is the eighth and farthest planet from the Sun in the Solar System. It is similar in composition to Uranus.",
        radius: "24622 km",
        distance_from_sun: "4495.1 million km",
        mass: "17 Earth masses",
        temperature_range: "-214°C",
        day_length: "16.1 hours",
        year_length: "164.8 Earth years",
        missions: 1,
    },
    BodyInfo {
        name: "Pluto",
        description: "Pluto is a dwarf planet in our Solar System and was formerly considered the ninth planet. It was reclassified as a dwarf planet by the International Astronomical Union (IAU) in 2006.",
        radius: "1186 km",
        distance_from_sun: "5906 million km",
        mass: "0.0025 Earth masses",
        temperature_range: "-233°C to -223°C",
        day_length: "153.3 hours",
        year_length: "248 Earth years",
        missions: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_order_matches_body_order() {
        for body in Body::ALL {
            assert_eq!(for_body(body).name, body.label());
        }
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(for_body(Body::Earth)).unwrap();
        assert!(json.contains("\"name\":\"Earth\""));
        assert!(json.contains("\"day_length\":\"24 hours\""));
    }
}
