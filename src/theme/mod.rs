mod theme_data;
pub mod persistence;

pub use persistence::{
    AsyncThemeOperation, CurrentThemeFile, LoadThemeRequest, LoadValidationWarning,
    NewThemeRequest, SaveThemeRequest, ThemeDirtyState, ThemeLoadError, ThemeSaveError,
    UnsavedChangesDialog,
};
pub use theme_data::{
    PageData, PageId, SavedTheme, SectionData, SectionId, SectionIdAllocator, SectionPreset,
    ThemeData, ThemeId, THEME_FORMAT_VERSION,
};

use bevy::prelude::*;

pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SectionIdAllocator>()
            .init_resource::<ThemeLoadError>()
            .init_resource::<ThemeSaveError>()
            .init_resource::<LoadValidationWarning>()
            .init_resource::<CurrentThemeFile>()
            .init_resource::<ThemeDirtyState>()
            .init_resource::<UnsavedChangesDialog>()
            .init_resource::<AsyncThemeOperation>()
            .add_message::<SaveThemeRequest>()
            .add_message::<LoadThemeRequest>()
            .add_message::<NewThemeRequest>()
            .add_systems(Startup, persistence::ensure_themes_directory)
            .add_systems(
                Update,
                (
                    persistence::save_theme_system.run_if(on_message::<SaveThemeRequest>),
                    persistence::load_theme_system.run_if(on_message::<LoadThemeRequest>),
                    persistence::new_theme_system.run_if(on_message::<NewThemeRequest>),
                    persistence::poll_save_tasks,
                    persistence::poll_load_tasks,
                    persistence::update_dirty_state,
                ),
            );
    }
}
