// src/ui/systems.rs
use crate::{
    dataset::events::{DatasetOperationFeedback, VisiblePrefixGrew},
    ui::UiFeedbackState,
};
use bevy::prelude::*;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<DatasetOperationFeedback>,
    mut grew_events: EventReader<VisiblePrefixGrew>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // First success wins; with no success the last error is kept.
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }

    // Growth is frequent while scrolling; only the latest matters.
    if let Some(grew) = grew_events.read().last() {
        if !ui_feedback_state.is_error {
            ui_feedback_state.last_message = format!("Revealed {} of {} records.", grew.visible, grew.total);
        }
    }
}
