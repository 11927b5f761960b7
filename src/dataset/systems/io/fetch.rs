// src/dataset/systems/io/fetch.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::dataset::{
    error::{DatasetError, DatasetResult},
    events::{DatasetFetched, DatasetOperationFeedback},
    record::{parse_records, records_from_value, Record},
    resources::{DatasetSampler, FetchState},
    store::DatasetStore,
};
use crate::settings::{AppSettings, DataSource};

/// Startup system: spawns the single background fetch of the configured source.
pub fn start_dataset_fetch(
    settings: Res<AppSettings>,
    runtime: Res<TokioTasksRuntime>,
    mut fetch_state: ResMut<FetchState>,
) {
    if *fetch_state != FetchState::Idle {
        debug!("Dataset fetch already started ({:?}); not spawning another.", *fetch_state);
        return;
    }
    *fetch_state = FetchState::InFlight;

    let source = settings.data_source();
    info!("Fetching dataset from {}", source);

    runtime.spawn_background_task(move |mut ctx| async move {
        let result = fetch_records(&source).await;

        // Delivered as an event; if the app is gone by now this never runs.
        ctx.run_on_main_thread(move |ctx| {
            ctx.world.send_event(DatasetFetched { result });
        })
        .await;
    });
}

/// Reads the source and parses it into records.
pub async fn fetch_records(source: &DataSource) -> DatasetResult<Vec<Record>> {
    match source {
        DataSource::Http(url) => {
            let response = reqwest::get(url).await?;
            if !response.status().is_success() {
                return Err(DatasetError::Fetch(format!("HTTP {} from {}", response.status(), url)));
            }
            let body: serde_json::Value = response.json().await?;
            records_from_value(body)
        }
        DataSource::File(path) => {
            let body = tokio::fs::read_to_string(path).await?;
            parse_records(&body)
        }
    }
}

/// Applies the fetch result to the store exactly once.
pub fn handle_dataset_fetched(
    mut events: EventReader<DatasetFetched>,
    mut fetch_state: ResMut<FetchState>,
    mut store: ResMut<DatasetStore>,
    mut sampler: ResMut<DatasetSampler>,
    mut feedback_writer: EventWriter<DatasetOperationFeedback>,
) {
    for event in events.read() {
        if *fetch_state == FetchState::Resolved {
            warn!("Ignoring dataset fetch result received after the dataset was already resolved.");
            continue;
        }
        *fetch_state = FetchState::Resolved;

        match &event.result {
            Ok(records) => {
                store.load(records.clone(), sampler.0.as_mut());
                feedback_writer.write(DatasetOperationFeedback {
                    message: format!("Loaded {} of {} records.", store.len(), records.len()),
                    is_error: false,
                });
            }
            Err(e) => {
                error!("Dataset fetch failed: {}", e);
                feedback_writer.write(DatasetOperationFeedback {
                    message: format!("Could not load dataset: {}", e),
                    is_error: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::test_support::sample_records;
    use crate::dataset::sampler::{FixedLengthSampler, FullSourceSampler};
    use std::path::PathBuf;

    fn test_app(sampler: DatasetSampler) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<DatasetFetched>()
            .add_event::<DatasetOperationFeedback>()
            .init_resource::<FetchState>()
            .init_resource::<DatasetStore>()
            .insert_resource(sampler)
            .add_systems(Update, handle_dataset_fetched);
        app
    }

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_grid_editor_fetch_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_fetch_result_loads_sampled_prefix() {
        let mut app = test_app(DatasetSampler(Box::new(FixedLengthSampler(7))));
        app.world_mut().send_event(DatasetFetched { result: Ok(sample_records(30)) });
        app.update();

        let store = app.world().resource::<DatasetStore>();
        assert_eq!(store.len(), 7);
        assert_eq!(store.visible_prefix().len(), 7);
        assert_eq!(*app.world().resource::<FetchState>(), FetchState::Resolved);
    }

    #[test]
    fn test_second_result_is_ignored() {
        let mut app = test_app(DatasetSampler(Box::new(FullSourceSampler)));
        app.world_mut().send_event(DatasetFetched { result: Ok(sample_records(3)) });
        app.update();
        app.world_mut().send_event(DatasetFetched { result: Ok(sample_records(90)) });
        app.update();

        assert_eq!(app.world().resource::<DatasetStore>().len(), 3);
    }

    #[test]
    fn test_failed_fetch_leaves_dataset_empty() {
        let mut app = test_app(DatasetSampler(Box::new(FullSourceSampler)));
        app.world_mut().send_event(DatasetFetched {
            result: Err(DatasetError::Fetch("connection refused".into())),
        });
        app.update();

        let store = app.world().resource::<DatasetStore>();
        assert!(store.is_empty());
        assert!(store.visible_prefix().is_empty());
        assert_eq!(*app.world().resource::<FetchState>(), FetchState::Resolved);
    }

    #[tokio::test]
    async fn test_fetch_records_from_file() {
        let path = scratch_file("ok.json");
        std::fs::write(&path, r#"[{"id": "a", "age": 30}, {"id": "b", "isActive": false}]"#).unwrap();
        let records = fetch_records(&DataSource::File(path.clone())).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "a");
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_fetch_records_missing_file_is_io_error() {
        let path = scratch_file("definitely_missing.json");
        let _ = std::fs::remove_file(&path);
        let result = fetch_records(&DataSource::File(path)).await;
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
