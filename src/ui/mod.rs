mod canvas;
pub mod file_menu;
mod pages_panel;
mod section_editor;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{ConfigResetNotification, MissingThemeWarning};
use crate::theme::{
    AsyncThemeOperation, LoadValidationWarning, ThemeLoadError, ThemeSaveError,
    UnsavedChangesDialog,
};

/// Resource that tracks whether any modal dialog is currently open.
/// Input handlers should check this to avoid processing input when
/// the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block builder input
    pub any_modal_open: bool,
}

/// Run condition: returns true when no modal dialog is open.
///
/// Use this to prevent input handlers from processing while the user is
/// interacting with a dialog.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    file_menu: Res<file_menu::FileMenuState>,
    missing_theme: Res<MissingThemeWarning>,
    config_reset: Res<ConfigResetNotification>,
    load_validation: Res<LoadValidationWarning>,
    unsaved_changes: Res<UnsavedChangesDialog>,
    save_error: Res<ThemeSaveError>,
    load_error: Res<ThemeLoadError>,
    async_op: Res<AsyncThemeOperation>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = file_menu.show_new_confirmation
        || file_menu.show_save_name_dialog
        || missing_theme.show
        || config_reset.show
        || load_validation.show
        || unsaved_changes.show_close_confirmation
        || save_error.message.is_some()
        || load_error.message.is_some()
        || async_op.is_busy();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<file_menu::FileMenuState>()
            .init_resource::<section_editor::SectionEditorState>()
            // Side panels must render first so top panels fit between them
            // Use chain() to enforce ordering
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // First: side panels
                    pages_panel::pages_panel_ui,
                    section_editor::section_editor_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                toolbar::toolbar_ui
                    .after(pages_panel::pages_panel_ui)
                    .after(section_editor::section_editor_ui),
            )
            // Central canvas fills whatever the panels leave
            .add_systems(
                EguiPrimaryContextPass,
                canvas::canvas_ui.after(toolbar::toolbar_ui),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    file_menu::file_menu_ui,
                    file_menu::missing_theme_warning_ui,
                    file_menu::unsaved_changes_dialog_ui,
                    file_menu::async_operation_modal_ui,
                    file_menu::save_error_dialog_ui,
                    file_menu::load_error_dialog_ui,
                    file_menu::load_validation_warning_ui,
                    file_menu::config_reset_notification_ui,
                )
                    .after(canvas::canvas_ui),
            )
            .add_systems(
                Update,
                (file_menu::handle_window_close, file_menu::quit_after_save_system),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
