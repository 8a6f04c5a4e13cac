pub mod lighting;
pub mod paths;
pub mod render;
pub mod stars;
