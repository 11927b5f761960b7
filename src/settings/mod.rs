pub mod io;

use std::path::PathBuf;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::dataset::reveal::{DEFAULT_REVEAL_INITIAL, DEFAULT_REVEAL_STEP};
use crate::dataset::sampler::DEFAULT_MAX_SAMPLE_LEN;

pub const ENV_SOURCE: &str = "GRID_EDITOR_SOURCE";
pub const ENV_SEED: &str = "GRID_EDITOR_SEED";

const DEFAULT_SOURCE: &str = "assets/data.json";

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// URL (`http://`, `https://`) or filesystem path of the JSON array to load.
    pub source: String,
    /// Load a random-length prefix of the source instead of all of it.
    pub sample_prefix: bool,
    pub max_sample_len: usize,
    /// Fixed seed for the prefix sampler; random per session when unset.
    pub sample_seed: Option<u64>,
    pub reveal_initial: usize,
    pub reveal_step: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            sample_prefix: true,
            max_sample_len: DEFAULT_MAX_SAMPLE_LEN,
            sample_seed: None,
            reveal_initial: DEFAULT_REVEAL_INITIAL,
            reveal_step: DEFAULT_REVEAL_STEP,
        }
    }
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(String),
    File(PathBuf),
}

impl DataSource {
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Http(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl AppSettings {
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.source)
    }

    /// Applies `GRID_EDITOR_SOURCE` / `GRID_EDITOR_SEED` style overrides.
    /// Unparseable seeds are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
            self.source = source;
        }
        if let Some(seed) = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok()) {
            self.sample_seed = Some(seed);
        }
    }
}
