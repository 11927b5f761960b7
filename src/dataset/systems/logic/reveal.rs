// src/dataset/systems/logic/reveal.rs
use bevy::prelude::*;

use crate::dataset::{
    events::{SentinelIntersection, VisiblePrefixGrew},
    store::DatasetStore,
};

/// Feeds sentinel visibility reports to the store's viewport watch.
pub fn handle_sentinel_intersection(
    mut events: EventReader<SentinelIntersection>,
    mut store: ResMut<DatasetStore>,
    mut grew_writer: EventWriter<VisiblePrefixGrew>,
) {
    for event in events.read() {
        if !store.reveal().is_armed() {
            trace!("Sentinel reported with no live viewport watch; ignoring.");
            continue;
        }
        if store.observe_sentinel(event.after_row, event.intersecting) {
            let visible = store.visible_prefix().len();
            debug!("Sentinel entered viewport; revealed count now {} of {} rows", store.reveal().revealed(), store.len());
            grew_writer.write(VisiblePrefixGrew { visible, total: store.len() });
        }
    }
}

/// Drops the viewport watch when the app shuts down.
pub fn teardown_viewport_watch_on_exit(
    mut exit_events: EventReader<AppExit>,
    mut store: ResMut<DatasetStore>,
) {
    if exit_events.is_empty() {
        return;
    }
    exit_events.clear();
    store.disarm_viewport_watch();
    info!(
        "Viewport watch torn down on exit ({} live).",
        store.reveal().signal().live_watches()
    );
}
