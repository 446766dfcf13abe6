use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::MAX_RECENT_THEMES;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    /// Recently saved or opened themes for quick access
    #[serde(default)]
    pub recent_themes: Vec<PathBuf>,

    /// Last opened theme file path (not auto-loaded, just remembered for quick access)
    #[serde(default)]
    pub last_theme_path: Option<PathBuf>,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource for the "theme file missing" warning dialog
#[derive(Resource, Default)]
pub struct MissingThemeWarning {
    pub show: bool,
    pub path: Option<PathBuf>,
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to add a theme to the recent list
#[derive(Message)]
pub struct AddRecentThemeRequest {
    pub path: PathBuf,
}

/// Message to update the last theme path in config
#[derive(Message)]
pub struct UpdateLastThemePathRequest {
    pub path: PathBuf,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = get_config_path();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Startup system to check if the last opened theme still exists
fn check_last_theme_exists(config: Res<AppConfig>, mut warning: ResMut<MissingThemeWarning>) {
    if let Some(ref path) = config.data.last_theme_path
        && !path.exists()
    {
        warning.show = true;
        warning.path = Some(path.clone());
        info!("Last opened theme no longer exists: {:?}", path);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to add a theme to the recent list
fn add_recent_theme_system(
    mut events: MessageReader<AddRecentThemeRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        // Remove if already in list (to move it to front)
        config.data.recent_themes.retain(|p| p != &event.path);

        // Add to front
        config.data.recent_themes.insert(0, event.path.clone());

        // Trim to max size
        config.data.recent_themes.truncate(MAX_RECENT_THEMES);

        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

/// System to update last theme path
fn update_last_theme_path_system(
    mut events: MessageReader<UpdateLastThemePathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
    mut recent_events: MessageWriter<AddRecentThemeRequest>,
) {
    for event in events.read() {
        config.data.last_theme_path = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        recent_events.write(AddRecentThemeRequest {
            path: event.path.clone(),
        });
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<MissingThemeWarning>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<AddRecentThemeRequest>()
            .add_message::<UpdateLastThemePathRequest>()
            .add_systems(
                Startup,
                (load_config_system, check_last_theme_exists)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                    add_recent_theme_system.run_if(on_message::<AddRecentThemeRequest>),
                    update_last_theme_path_system.run_if(on_message::<UpdateLastThemePathRequest>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(data.recent_themes.is_empty());
        assert!(data.last_theme_path.is_none());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            recent_themes: vec![PathBuf::from("/path/one"), PathBuf::from("/path/two")],
            last_theme_path: Some(PathBuf::from("/path/to/theme.json")),
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.recent_themes, data.recent_themes);
        assert_eq!(parsed.last_theme_path, data.last_theme_path);
    }

    #[test]
    fn test_app_config_data_tolerates_missing_fields() {
        let parsed: AppConfigData = serde_json::from_str("{}").unwrap();
        assert!(parsed.recent_themes.is_empty());
        assert!(parsed.last_theme_path.is_none());
    }

    #[test]
    fn test_missing_theme_warning_default() {
        let warning = MissingThemeWarning::default();
        assert!(!warning.show);
        assert!(warning.path.is_none());
    }
}
