use crate::components::visual::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Texture manifest describing every image the app may request.
/// Loaded from a JSON file at runtime; JS performs the actual image IO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Named texture lookup: name → path + fallback color.
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "textures/earth.jpg").
    pub path: String,
    /// Flat color used when the image fails to load.
    pub fallback: Rgb,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
