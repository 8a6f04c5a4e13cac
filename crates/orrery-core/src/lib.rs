//! Celestial-body catalog and orbit simulation for the solar-system orrery.
//!
//! Pure math and static data — no engine or browser dependencies.
//! Positions are computed in f64 and converted to f32 only at the
//! scene-application step in the app crate.

pub mod body;
pub mod catalog;
pub mod info;
pub mod profile;
pub mod simulator;

pub use body::{Body, CelestialBody, RingGeometry};
pub use catalog::{BodyCatalog, CatalogError};
pub use info::BodyInfo;
pub use profile::{ScaleConfig, ScaleProfile};
pub use simulator::{BodyFrame, OrbitSimulator, OrbitState};
