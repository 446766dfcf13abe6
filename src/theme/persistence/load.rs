//! Theme load system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::builder::EditHistory;
use crate::config::UpdateLastThemePathRequest;
use crate::sections::SectionRegistry;
use crate::theme::{SavedTheme, SectionIdAllocator};

use super::messages::LoadThemeRequest;
use super::resources::{
    AsyncThemeOperation, CurrentThemeFile, LoadThemeTask, LoadValidationWarning, ThemeDirtyState,
    ThemeLoadError,
};
use super::results::LoadResult;
use super::theme_state::install_theme;

/// Starts an async load operation (file I/O and parsing only)
pub fn load_theme_system(
    mut commands: Commands,
    mut events: MessageReader<LoadThemeRequest>,
    mut async_op: ResMut<AsyncThemeOperation>,
) {
    for event in events.read() {
        // Don't start a new load if one is already in progress
        if async_op.is_busy() {
            warn!("Load operation already in progress");
            continue;
        }

        let path = event.path.clone();
        let theme_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("theme")
            .to_string();

        // Mark as loading
        async_op.is_loading = true;
        async_op.operation_description = Some(format!("Loading {}...", theme_name));

        // Spawn async task for file I/O and parsing
        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            let json = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    return LoadResult {
                        path,
                        saved_theme: None,
                        error: Some(format!("Failed to read file: {}", e)),
                    };
                }
            };

            match serde_json::from_str::<SavedTheme>(&json) {
                Ok(saved_theme) => LoadResult {
                    path,
                    saved_theme: Some(saved_theme),
                    error: None,
                },
                Err(e) => LoadResult {
                    path,
                    saved_theme: None,
                    error: Some(format!("Failed to parse theme file: {}", e)),
                },
            }
        });

        commands.spawn(LoadThemeTask(task));
    }
}

/// Section types named by the manifest that have no registered renderer.
pub(crate) fn unknown_section_types(manifest: &[String], registry: &SectionRegistry) -> Vec<String> {
    manifest
        .iter()
        .filter(|name| !registry.contains(name))
        .cloned()
        .collect()
}

/// Polls load tasks and installs the loaded theme as the new baseline
#[allow(clippy::too_many_arguments)]
pub fn poll_load_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LoadThemeTask)>,
    mut async_op: ResMut<AsyncThemeOperation>,
    mut history: ResMut<EditHistory>,
    mut allocator: ResMut<SectionIdAllocator>,
    mut load_error: ResMut<ThemeLoadError>,
    mut load_warning: ResMut<LoadValidationWarning>,
    registry: Res<SectionRegistry>,
    mut current_theme_file: ResMut<CurrentThemeFile>,
    mut config_events: MessageWriter<UpdateLastThemePathRequest>,
    mut dirty_state: ResMut<ThemeDirtyState>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            // Clear async state
            async_op.is_loading = false;
            async_op.operation_description = None;
            load_error.message = None;

            // Handle error
            if let Some(error) = result.error {
                load_error.message = Some(error.clone());
                error!("{}", error);
                commands.entity(entity).despawn();
                continue;
            }

            let Some(saved_theme) = result.saved_theme else {
                commands.entity(entity).despawn();
                continue;
            };

            // Unknown section types warn but never block the load; they
            // preview as placeholders on the canvas.
            let unknown = unknown_section_types(&saved_theme.section_manifest, &registry);
            if !unknown.is_empty() {
                warn!(
                    "Theme {:?} uses {} unknown section type(s): {}",
                    result.path,
                    unknown.len(),
                    unknown.join(", ")
                );
                load_warning.show = true;
                load_warning.unknown_sections = unknown;
                load_warning.theme_path = Some(result.path.clone());
            }

            // The loaded theme becomes the undo floor.
            install_theme(
                saved_theme.theme,
                &mut history,
                &mut allocator,
                &mut dirty_state,
            );

            info!("Theme loaded from {:?}", result.path);

            // Update current theme file and config
            current_theme_file.path = Some(result.path.clone());
            config_events.write(UpdateLastThemePathRequest {
                path: result.path.clone(),
            });

            commands.entity(entity).despawn();
        }
    }
}
