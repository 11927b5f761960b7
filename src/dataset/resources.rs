// src/dataset/resources.rs
use bevy::prelude::*;

use super::sampler::{FullSourceSampler, PrefixSampler, RandomPrefixSampler};
use crate::settings::AppSettings;

/// Lifecycle of the one-shot dataset fetch.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    InFlight,
    /// A result (success or failure) has been applied. Later results are ignored.
    Resolved,
}

/// The sampling strategy `DatasetStore::load` uses.
#[derive(Resource)]
pub struct DatasetSampler(pub Box<dyn PrefixSampler>);

impl DatasetSampler {
    pub fn from_settings(settings: &AppSettings) -> Self {
        if settings.sample_prefix {
            Self(Box::new(RandomPrefixSampler::new(settings.max_sample_len, settings.sample_seed)))
        } else {
            Self(Box::new(FullSourceSampler))
        }
    }
}
