// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod field_view;
pub mod systems;
pub mod widgets;

use elements::editor::grid_editor_ui;
use systems::handle_ui_feedback;

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the grid editor UI.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<UiFeedbackState>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, grid_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
