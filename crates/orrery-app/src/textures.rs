//! Texture names and fallback colors for every body.
//!
//! Texture names double as manifest keys; the JS side loads the images and
//! reports per-slot results. Fallback colors are what the scene shows when
//! an image is missing, so they approximate each body's real hue.

use orrery_core::Body;
use orrery_engine::Rgb;

/// Flat color standing in for a body whose texture failed to load.
pub fn fallback_color(body: Body) -> Rgb {
    match body {
        Body::Sun => Rgb::new(1.0, 0.85, 0.4),
        Body::Mercury => Rgb::new(0.6, 0.55, 0.5),
        Body::Venus => Rgb::new(0.9, 0.75, 0.4),
        Body::Earth => Rgb::new(0.2, 0.4, 0.8),
        Body::Mars => Rgb::new(0.8, 0.3, 0.15),
        Body::Jupiter => Rgb::new(0.8, 0.7, 0.5),
        Body::Saturn => Rgb::new(0.85, 0.75, 0.5),
        Body::Uranus => Rgb::new(0.5, 0.75, 0.85),
        Body::Neptune => Rgb::new(0.25, 0.35, 0.8),
        Body::Pluto => Rgb::new(0.7, 0.6, 0.5),
    }
}

/// Fallback for the two ring textures.
pub fn ring_fallback_color(texture: &str) -> Rgb {
    match texture {
        "uranus_ring" => Rgb::new(0.6, 0.7, 0.75),
        _ => Rgb::new(0.8, 0.7, 0.5),
    }
}

/// Earth's atmosphere halo tint.
pub const ATMOSPHERE_COLOR: Rgb = Rgb::new(0.4, 0.6, 1.0);

/// Manifest JSON covering every body and ring texture, used when the host
/// page does not supply its own.
pub fn default_manifest_json() -> String {
    let mut entries = Vec::with_capacity(Body::COUNT + 2);
    for body in Body::ALL {
        let c = fallback_color(body);
        entries.push(format!(
            r#""{name}": {{ "path": "textures/{name}.jpg", "fallback": {{ "r": {}, "g": {}, "b": {} }} }}"#,
            c.r,
            c.g,
            c.b,
            name = body.name()
        ));
    }
    for ring in ["saturn_ring", "uranus_ring"] {
        let c = ring_fallback_color(ring);
        entries.push(format!(
            r#""{ring}": {{ "path": "textures/{ring}.png", "fallback": {{ "r": {}, "g": {}, "b": {} }} }}"#,
            c.r, c.g, c.b
        ));
    }
    format!(r#"{{ "textures": {{ {} }} }}"#, entries.join(", "))
}
