use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use bevy::log::{info, error};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "GridEditorOrg";
const APPLICATION: &str = "JsonGridEditor";
const CONFIG_FILE: &str = "app_settings.json";

fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(io::ErrorKind::NotFound, "Could not determine project directories for app settings."))
    }
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T> {
    load_settings_from_path(&get_config_path()?)
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    save_settings_to_path(settings, &get_config_path()?)
}

/// Missing file yields `T::default()`; a corrupt one is an `InvalidData` error.
pub fn load_settings_from_path<T: for<'de> serde::de::Deserialize<'de> + Default>(config_file: &Path) -> io::Result<T> {
    info!("AppSettings: Attempting to load settings from {:?}", config_file);
    match fs::File::open(config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => {
                    info!("AppSettings: Successfully deserialized settings.");
                    Ok(settings)
                }
                Err(e) => {
                    error!("AppSettings: Failed to parse settings file {:?}: {}", config_file, e);
                    Err(io::Error::new(ErrorKind::InvalidData, format!("Failed to parse settings file: {}", e)))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Returning default.", config_file);
            Ok(Default::default())
        }
        Err(e) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", config_file, e);
            Err(e)
        }
    }
}

pub fn save_settings_to_path<T: serde::Serialize>(settings: &T, config_file: &Path) -> io::Result<()> {
    info!("AppSettings: Saving settings to {:?}", config_file);
    let file = fs::File::create(config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!("AppSettings: Failed to serialize settings to {:?}: {}", config_file, e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppSettings;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_grid_editor_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = scratch_file("missing.json");
        let _ = fs::remove_file(&path);
        let settings: AppSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_file("roundtrip.json");
        let settings = AppSettings {
            source: "http://localhost:1234/data.json".into(),
            sample_seed: Some(5),
            reveal_step: 10,
            ..AppSettings::default()
        };
        save_settings_to_path(&settings, &path).unwrap();
        let loaded: AppSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_invalid_data() {
        let path = scratch_file("corrupt.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings_from_path::<AppSettings>(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let _ = fs::remove_file(&path);
    }
}
