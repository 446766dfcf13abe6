//! Resource types for theme persistence state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;

use super::results::{LoadResult, SaveResult};

#[derive(Resource, Default)]
pub struct ThemeLoadError {
    pub message: Option<String>,
}

/// Resource tracking save operation errors for display to user.
#[derive(Resource, Default)]
pub struct ThemeSaveError {
    pub message: Option<String>,
}

/// Load-time warning about section types the registry doesn't know.
/// The theme still loads; unknown sections preview as placeholders.
#[derive(Resource, Default)]
pub struct LoadValidationWarning {
    /// Whether to show the warning dialog
    pub show: bool,
    /// Section type names with no registered renderer
    pub unknown_sections: Vec<String>,
    /// The theme file they came from
    pub theme_path: Option<PathBuf>,
}

/// Resource tracking async theme I/O operations for the modal dialog
#[derive(Resource, Default)]
pub struct AsyncThemeOperation {
    /// Whether a save operation is in progress
    pub is_saving: bool,
    /// Whether a load operation is in progress
    pub is_loading: bool,
    /// Description of the current operation
    pub operation_description: Option<String>,
}

impl AsyncThemeOperation {
    pub fn is_busy(&self) -> bool {
        self.is_saving || self.is_loading
    }
}

/// Component for save task
#[derive(Component)]
pub struct SaveThemeTask(pub Task<SaveResult>);

/// Component for load task
#[derive(Component)]
pub struct LoadThemeTask(pub Task<LoadResult>);

/// Resource tracking the currently loaded theme file path
#[derive(Resource, Default)]
pub struct CurrentThemeFile {
    pub path: Option<PathBuf>,
}

/// Resource for the unsaved-changes confirmation shown on window close
#[derive(Resource, Default)]
pub struct UnsavedChangesDialog {
    pub show_close_confirmation: bool,
    /// Set when the user chose "Save and Quit"; the app exits once the
    /// save completes and the state is clean.
    pub quit_after_save: bool,
}

/// Resource tracking whether the open theme has unsaved edits.
///
/// The theme tree lives in the edit history, so dirtiness is the history
/// revision drifting from the revision recorded at the last save/load.
#[derive(Resource, Default)]
pub struct ThemeDirtyState {
    pub is_dirty: bool,
    pub last_saved_revision: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_operation_busy() {
        let mut op = AsyncThemeOperation::default();
        assert!(!op.is_busy());
        op.is_saving = true;
        assert!(op.is_busy());
        op.is_saving = false;
        op.is_loading = true;
        assert!(op.is_busy());
    }

    #[test]
    fn test_dirty_state_default_is_clean() {
        let dirty = ThemeDirtyState::default();
        assert!(!dirty.is_dirty);
        assert_eq!(dirty.last_saved_revision, 0);
    }
}
