use crate::assets::manifest::TextureManifest;
use crate::components::visual::{Material, Rgb};
use serde::Serialize;
use std::collections::HashMap;

/// Opaque handle to a texture slot on the JS side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

#[derive(Debug, Clone)]
struct SlotEntry {
    name: String,
    path: String,
    fallback: Rgb,
    /// None until JS reports; Some(true) on success, Some(false) on failure.
    loaded: Option<bool>,
}

/// Wire description of one slot, handed to JS so it knows what to load.
#[derive(Debug, Serialize)]
struct SlotRequest<'a> {
    slot: u32,
    name: &'a str,
    path: &'a str,
}

/// Registry of named textures, built from a TextureManifest.
///
/// Slot indices are assigned in sorted-name order so they are stable
/// across runs. JS loads each path and reports back per slot; a failed
/// load leaves materials on their fallback color.
pub struct TextureRegistry {
    slots: Vec<SlotEntry>,
    by_name: HashMap<String, u32>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Build a registry from a parsed TextureManifest.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut names: Vec<&String> = manifest.textures.keys().collect();
        names.sort();

        let mut slots = Vec::with_capacity(names.len());
        let mut by_name = HashMap::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            let desc = &manifest.textures[name];
            by_name.insert(name.clone(), i as u32);
            slots.push(SlotEntry {
                name: name.clone(),
                path: desc.path.clone(),
                fallback: desc.fallback,
                loaded: None,
            });
        }
        Self { slots, by_name }
    }

    /// Look up a texture slot by name.
    pub fn slot(&self, name: &str) -> Option<TextureSlot> {
        self.by_name.get(name).copied().map(TextureSlot)
    }

    /// Record a load result reported from JS.
    pub fn report(&mut self, slot: TextureSlot, ok: bool) {
        if let Some(entry) = self.slots.get_mut(slot.0 as usize) {
            entry.loaded = Some(ok);
            if !ok {
                log::warn!(
                    "texture `{}` failed to load ({}), using fallback color",
                    entry.name,
                    entry.path
                );
            }
        } else {
            log::warn!("texture result for unknown slot {}", slot.0);
        }
    }

    /// Material for a named texture: the texture slot when the image
    /// loaded, otherwise the manifest's fallback color. Unknown names
    /// get a plain white material rather than an error.
    pub fn material(&self, name: &str) -> Material {
        match self.by_name.get(name) {
            Some(&idx) => {
                let entry = &self.slots[idx as usize];
                let mut m = Material::color(entry.fallback);
                if entry.loaded == Some(true) {
                    m = m.with_texture(TextureSlot(idx));
                }
                m
            }
            None => {
                log::warn!("no texture named `{name}` in the manifest");
                Material::color(Rgb::WHITE)
            }
        }
    }

    /// Whether every slot has a reported result.
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(|s| s.loaded.is_some())
    }

    /// Number of slots still awaiting a result.
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| s.loaded.is_none()).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// JSON array of `{slot, name, path}` requests for the JS loader.
    pub fn requests_json(&self) -> Result<String, serde_json::Error> {
        let requests: Vec<SlotRequest> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, s)| SlotRequest {
                slot: i as u32,
                name: &s.name,
                path: &s.path,
            })
            .collect();
        serde_json::to_string(&requests)
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TextureRegistry {
        let json = r#"{
            "textures": {
                "earth": { "path": "textures/earth.jpg", "fallback": { "r": 0.2, "g": 0.4, "b": 0.8 } },
                "mars": { "path": "textures/mars.jpg", "fallback": { "r": 0.8, "g": 0.3, "b": 0.15 } }
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        TextureRegistry::from_manifest(&manifest)
    }

    #[test]
    fn slots_are_assigned_in_sorted_name_order() {
        let reg = registry();
        assert_eq!(reg.slot("earth"), Some(TextureSlot(0)));
        assert_eq!(reg.slot("mars"), Some(TextureSlot(1)));
        assert_eq!(reg.slot("venus"), None);
    }

    #[test]
    fn material_uses_fallback_until_load_succeeds() {
        let mut reg = registry();

        // No result yet: fallback color, no texture.
        let m = reg.material("earth");
        assert_eq!(m.texture, None);
        assert_eq!(m.color, Rgb::new(0.2, 0.4, 0.8));

        reg.report(TextureSlot(0), true);
        let m = reg.material("earth");
        assert_eq!(m.texture, Some(TextureSlot(0)));
    }

    #[test]
    fn failed_load_degrades_to_fallback_color() {
        let mut reg = registry();
        reg.report(TextureSlot(1), false);
        let m = reg.material("mars");
        assert_eq!(m.texture, None);
        assert_eq!(m.color, Rgb::new(0.8, 0.3, 0.15));
    }

    #[test]
    fn unknown_name_gets_white_material() {
        let reg = registry();
        let m = reg.material("krypton");
        assert_eq!(m.texture, None);
        assert_eq!(m.color, Rgb::WHITE);
    }

    #[test]
    fn readiness_tracks_reported_results() {
        let mut reg = registry();
        assert!(!reg.is_ready());
        assert_eq!(reg.pending(), 2);

        reg.report(TextureSlot(0), true);
        reg.report(TextureSlot(1), false);
        assert!(reg.is_ready());
        assert_eq!(reg.pending(), 0);
    }

    #[test]
    fn requests_json_lists_every_slot() {
        let reg = registry();
        let json = reg.requests_json().unwrap();
        assert!(json.contains("\"name\":\"earth\""));
        assert!(json.contains("\"path\":\"textures/mars.jpg\""));
    }
}
