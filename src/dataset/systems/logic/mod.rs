// src/dataset/systems/logic/mod.rs
pub mod edit;
pub mod reveal;

pub use edit::{handle_begin_edit, handle_cancel_edit, handle_field_update};
pub use reveal::{handle_sentinel_intersection, teardown_viewport_watch_on_exit};
