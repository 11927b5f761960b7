// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

mod cli;
mod dataset;
mod settings;
mod ui;

use cli::Cli;
use dataset::DatasetPlugin;
use settings::{io::{load_settings_from_file, save_settings_to_file}, AppSettings};
use ui::EditorUiPlugin;

fn main() {
    let cli = Cli::parse();
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let mut settings: AppSettings = load_settings_from_file().unwrap_or_else(|e| {
        eprintln!("Could not read settings ({}); using defaults.", e);
        AppSettings::default()
    });
    settings.apply_env_overrides(|key| std::env::var(key).ok());
    cli.apply_to(&mut settings);

    if cli.save_settings {
        if let Err(e) = save_settings_to_file(&settings) {
            eprintln!("Could not save settings: {}", e);
        }
    }

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(settings)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "JSON Grid Editor".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn,reqwest=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(DatasetPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
