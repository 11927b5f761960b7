// src/dataset/plugin.rs
use bevy::prelude::*;

use super::events::{
    DatasetFetched, DatasetOperationFeedback, RequestBeginEdit, RequestCancelEdit,
    SentinelIntersection, UpdateFieldEvent, VisiblePrefixGrew,
};
use super::resources::{DatasetSampler, FetchState};
use super::reveal::RevealController;
use super::store::DatasetStore;
use super::systems;
use crate::settings::AppSettings;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum DatasetSystemSet {
    Load,       // Applying the fetch result
    ApplyEdits, // Edit cursor and field changes from the UI
    Reveal,     // Growing the visible prefix
}

/// Owns the dataset store and the systems that change it.
///
/// Reads `AppSettings` if it was inserted before this plugin is added,
/// otherwise uses defaults.
pub struct DatasetPlugin;

impl Plugin for DatasetPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<AppSettings>()
            .cloned()
            .unwrap_or_default();

        app.configure_sets(
            Update,
            (
                DatasetSystemSet::Load,
                DatasetSystemSet::ApplyEdits.after(DatasetSystemSet::Load),
                DatasetSystemSet::Reveal.after(DatasetSystemSet::ApplyEdits),
            ),
        );

        // --- Resource Initialization ---
        app.init_resource::<FetchState>()
            .insert_resource(DatasetStore::new(RevealController::new(
                settings.reveal_initial,
                settings.reveal_step,
            )))
            .insert_resource(DatasetSampler::from_settings(&settings));

        // --- Event Registration ---
        app.add_event::<DatasetFetched>()
            .add_event::<RequestBeginEdit>()
            .add_event::<RequestCancelEdit>()
            .add_event::<UpdateFieldEvent>()
            .add_event::<SentinelIntersection>()
            .add_event::<VisiblePrefixGrew>()
            .add_event::<DatasetOperationFeedback>();

        app.add_systems(Startup, systems::io::start_dataset_fetch);

        app.add_systems(
            Update,
            systems::io::handle_dataset_fetched.in_set(DatasetSystemSet::Load),
        );
        app.add_systems(
            Update,
            (
                systems::logic::handle_field_update,
                systems::logic::handle_begin_edit,
                systems::logic::handle_cancel_edit,
            )
                .chain()
                .in_set(DatasetSystemSet::ApplyEdits),
        );
        app.add_systems(
            Update,
            systems::logic::handle_sentinel_intersection.in_set(DatasetSystemSet::Reveal),
        );
        app.add_systems(Last, systems::logic::teardown_viewport_watch_on_exit);

        info!(
            "DatasetPlugin initialized (source: {}, reveal {}+{}).",
            settings.source, settings.reveal_initial, settings.reveal_step
        );
    }
}
