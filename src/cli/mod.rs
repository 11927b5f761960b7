// src/cli/mod.rs
// Command-line overrides for the editor settings

use clap::Parser;

use crate::settings::AppSettings;

#[derive(Parser, Debug, Default)]
#[command(name = "json_grid_editor")]
#[command(about = "Browse and edit a JSON array of records in a lazily revealed grid", long_about = None)]
pub struct Cli {
    /// URL or file path of the JSON array to load
    #[arg(long)]
    pub source: Option<String>,

    /// Seed for the random dataset length
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the whole source instead of a random-length prefix
    #[arg(long)]
    pub full: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub save_settings: bool,
}

impl Cli {
    /// Command-line values win over whatever the settings already hold.
    pub fn apply_to(&self, settings: &mut AppSettings) {
        if let Some(source) = &self.source {
            settings.source = source.clone();
        }
        if let Some(seed) = self.seed {
            settings.sample_seed = Some(seed);
        }
        if self.full {
            settings.sample_prefix = false;
        }
    }
}
