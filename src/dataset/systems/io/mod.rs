// src/dataset/systems/io/mod.rs
pub mod fetch;

pub use fetch::{fetch_records, handle_dataset_fetched, start_dataset_fetch};
