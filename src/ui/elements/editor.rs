// src/ui/elements/editor.rs

mod main_editor;
mod row_block;

pub use main_editor::grid_editor_ui;
