// src/ui/elements/editor/row_block.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::dataset::{
    events::{RequestBeginEdit, RequestCancelEdit, UpdateFieldEvent},
    record::Record,
};
use crate::ui::field_view::{field_view, EditMode};
use crate::ui::widgets::paint_field;

/// Draws one record: the Edit/Cancel control followed by one control per field.
#[allow(clippy::too_many_arguments)]
pub(super) fn show_row_block(
    ui: &mut egui::Ui,
    row_index: usize,
    record: &Record,
    editing: bool,
    modified: bool,
    begin_writer: &mut EventWriter<RequestBeginEdit>,
    cancel_writer: &mut EventWriter<RequestCancelEdit>,
    update_writer: &mut EventWriter<UpdateFieldEvent>,
) {
    let mode = if editing { EditMode::Edit } else { EditMode::Read };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            if editing {
                if ui.button("Cancel").clicked() {
                    cancel_writer.write(RequestCancelEdit);
                }
            } else if ui.button("Edit").clicked() {
                begin_writer.write(RequestBeginEdit { row_index });
            }
            if modified {
                ui.weak("(modified)");
            }
        });

        for field in record.fields() {
            let id = egui::Id::new("field").with(row_index).with(&field.key);
            let view = field_view(&field.key, &field.value, mode);
            if let Some(new_value) = paint_field(ui, id, &view) {
                update_writer.write(UpdateFieldEvent {
                    row_index,
                    key: field.key.clone(),
                    new_value,
                });
            }
        }
    });
}
