use wasm_bindgen::prelude::*;

use orrery_engine::*;

mod game;
mod textures;

use game::Orrery;

orrery_web::export_app!(Orrery, "orrery");

/// Built-in texture manifest for hosts that do not ship their own.
#[wasm_bindgen]
pub fn orrery_default_manifest() -> String {
    textures::default_manifest_json()
}
