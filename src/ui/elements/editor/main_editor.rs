// src/ui/elements/editor/main_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::dataset::{
    events::{RequestBeginEdit, RequestCancelEdit, SentinelIntersection, UpdateFieldEvent},
    resources::FetchState,
    store::DatasetStore,
};
use crate::ui::UiFeedbackState;
use super::row_block::show_row_block;

const SENTINEL_TEXT: &str = "Loading more items...";

#[allow(clippy::too_many_arguments)]
pub fn grid_editor_ui(
    mut contexts: EguiContexts,
    store: Res<DatasetStore>,
    fetch_state: Res<FetchState>,
    ui_feedback: Res<UiFeedbackState>,
    mut begin_writer: EventWriter<RequestBeginEdit>,
    mut cancel_writer: EventWriter<RequestCancelEdit>,
    mut update_writer: EventWriter<UpdateFieldEvent>,
    mut sentinel_writer: EventWriter<SentinelIntersection>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("grid_status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let visible = store.visible_prefix().len();
            match *fetch_state {
                FetchState::Idle | FetchState::InFlight => {
                    ui.spinner();
                    ui.label("Fetching dataset...");
                }
                FetchState::Resolved => {
                    ui.label(format!("Showing {} of {} records", visible, store.len()));
                }
            }
            if let Some(row) = store.editing() {
                ui.separator();
                ui.label(format!("Editing row {}", row));
            }
        });

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if *fetch_state == FetchState::Resolved && store.is_empty() {
                    ui.label("No records.");
                }
                let drawn_rows = store.visible_prefix().len();
                for (row_index, record) in store.visible_prefix().iter().enumerate() {
                    show_row_block(
                        ui,
                        row_index,
                        record,
                        store.is_editing(row_index),
                        store.is_row_modified(row_index),
                        &mut begin_writer,
                        &mut cancel_writer,
                        &mut update_writer,
                    );
                }

                // Sentinel after the last visible row; its visibility drives the reveal.
                let sentinel = ui.label(SENTINEL_TEXT);
                sentinel_writer.write(SentinelIntersection {
                    after_row: drawn_rows,
                    intersecting: ui.is_rect_visible(sentinel.rect),
                });
            });
    });
}
