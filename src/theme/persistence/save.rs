//! Theme save system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::builder::EditHistory;
use crate::config::UpdateLastThemePathRequest;
use crate::theme::SavedTheme;

use super::messages::SaveThemeRequest;
use super::resources::{
    AsyncThemeOperation, CurrentThemeFile, SaveThemeTask, ThemeDirtyState, ThemeSaveError,
};
use super::results::SaveResult;

/// Starts an async save operation capturing the present snapshot
pub fn save_theme_system(
    mut commands: Commands,
    mut events: MessageReader<SaveThemeRequest>,
    history: Res<EditHistory>,
    mut async_op: ResMut<AsyncThemeOperation>,
) {
    for event in events.read() {
        // Don't start a new save if one is already in progress
        if async_op.is_busy() {
            warn!("Save operation already in progress");
            continue;
        }

        let Some(theme) = history.present().theme.clone() else {
            warn!("Save requested with no theme open");
            continue;
        };

        let saved_theme = SavedTheme::from_theme(theme);
        let revision = history.revision();

        let path = event.path.clone();
        let theme_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("theme")
            .to_string();

        // Mark as saving
        async_op.is_saving = true;
        async_op.operation_description = Some(format!("Saving {}...", theme_name));

        // Spawn async task for file I/O
        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            match serde_json::to_string_pretty(&saved_theme) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        SaveResult {
                            path,
                            revision,
                            success: false,
                            error: Some(format!("Failed to write file: {}", e)),
                        }
                    } else {
                        SaveResult {
                            path,
                            revision,
                            success: true,
                            error: None,
                        }
                    }
                }
                Err(e) => SaveResult {
                    path,
                    revision,
                    success: false,
                    error: Some(format!("Failed to serialize theme: {}", e)),
                },
            }
        });

        commands.spawn(SaveThemeTask(task));
    }
}

/// Polls save tasks and handles completion
pub fn poll_save_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveThemeTask)>,
    mut async_op: ResMut<AsyncThemeOperation>,
    mut current_theme_file: ResMut<CurrentThemeFile>,
    mut config_events: MessageWriter<UpdateLastThemePathRequest>,
    mut dirty_state: ResMut<ThemeDirtyState>,
    mut save_error: ResMut<ThemeSaveError>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            // Clear async state
            async_op.is_saving = false;
            async_op.operation_description = None;

            if result.success {
                info!("Theme saved to {:?}", result.path);

                // Clear any previous save error
                save_error.message = None;

                // Update current theme file and config
                current_theme_file.path = Some(result.path.clone());
                config_events.write(UpdateLastThemePathRequest {
                    path: result.path.clone(),
                });

                // Edits made while the save was in flight stay dirty
                dirty_state.last_saved_revision = result.revision;
            } else if let Some(error) = result.error {
                error!("{}", error);
                // Store error for display to user
                save_error.message = Some(error);
            }

            commands.entity(entity).despawn();
        }
    }
}
