// src/dataset/events.rs
use bevy::prelude::Event;

use super::error::DatasetError;
use super::record::{FieldValue, Record};

/// Sent from the fetch task back to the main thread with the parsed source list.
#[derive(Event, Debug, Clone)]
pub struct DatasetFetched {
    pub result: Result<Vec<Record>, DatasetError>,
}

/// Sent when the user clicks "Edit" on a row.
#[derive(Event, Debug, Clone, Copy)]
pub struct RequestBeginEdit {
    pub row_index: usize,
}

/// Sent when the user clicks "Cancel" on the row being edited.
#[derive(Event, Debug, Clone, Copy)]
pub struct RequestCancelEdit;

/// Sent when a field widget in edit mode produces a new value.
#[derive(Event, Debug, Clone)]
pub struct UpdateFieldEvent {
    pub row_index: usize,
    pub key: String,
    pub new_value: FieldValue,
}

/// Sent by the editor every frame the sentinel is drawn.
#[derive(Event, Debug, Clone, Copy)]
pub struct SentinelIntersection {
    /// Number of rows drawn above the sentinel in that frame.
    pub after_row: usize,
    pub intersecting: bool,
}

/// Sent after the visible prefix grew.
#[derive(Event, Debug, Clone, Copy)]
pub struct VisiblePrefixGrew {
    pub visible: usize,
    pub total: usize,
}

/// Status messages for the UI feedback line.
#[derive(Event, Debug, Clone)]
pub struct DatasetOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
