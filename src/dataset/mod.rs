// src/dataset/mod.rs

// --- Public Interface ---
pub mod error;
pub mod events;
pub mod plugin;
pub mod record;
pub mod resources;
pub mod reveal;
pub mod row_controller;
pub mod sampler;
pub mod store;
pub mod viewport;

pub(crate) mod systems;

pub use plugin::DatasetPlugin;
