// src/dataset/systems/logic/edit.rs
use bevy::prelude::*;

use crate::dataset::{
    error::DatasetError,
    events::{RequestBeginEdit, RequestCancelEdit, UpdateFieldEvent},
    store::DatasetStore,
};

pub fn handle_field_update(
    mut events: EventReader<UpdateFieldEvent>,
    mut store: ResMut<DatasetStore>,
) {
    for event in events.read() {
        let row_idx = event.row_index;
        match store.apply_field_edit(row_idx, &event.key, event.new_value.clone()) {
            Ok(true) => {
                let id = store.records().get(row_idx).map(|r| r.id()).unwrap_or_default();
                trace!("Updated field '{}' of row {} (id {}) to {:?}", event.key, row_idx, id, event.new_value);
            }
            Ok(false) => {
                trace!("Field '{}' of row {} unchanged. Skipping update.", event.key, row_idx);
            }
            Err(DatasetError::IdentifierImmutable) => {
                debug!("Ignoring edit of identifier field on row {}.", row_idx);
            }
            Err(e) => {
                warn!("Field update rejected for row {} field '{}': {}", row_idx, event.key, e);
            }
        }
    }
}

pub fn handle_begin_edit(
    mut events: EventReader<RequestBeginEdit>,
    mut store: ResMut<DatasetStore>,
) {
    for event in events.read() {
        if let Some(previous) = store.editing().filter(|&prev| prev != event.row_index) {
            debug!("Moving edit cursor from row {} to row {}; row {} keeps its edits.", previous, event.row_index, previous);
        }
        store.begin_edit(event.row_index);
    }
}

pub fn handle_cancel_edit(
    mut events: EventReader<RequestCancelEdit>,
    mut store: ResMut<DatasetStore>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    info!("Edit cancelled; reverting all {} rows to the loaded snapshot.", store.len());
    store.cancel_edit();
}
