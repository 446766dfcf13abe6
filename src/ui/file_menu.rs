use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, ConfigResetNotification, MissingThemeWarning, SaveConfigRequest};
use crate::theme::{
    AsyncThemeOperation, CurrentThemeFile, LoadThemeRequest, LoadValidationWarning,
    NewThemeRequest, SaveThemeRequest, ThemeDirtyState, ThemeLoadError, ThemeSaveError,
    UnsavedChangesDialog,
};

#[derive(Resource, Default)]
pub struct FileMenuState {
    pub show_new_confirmation: bool,
    pub show_save_name_dialog: bool,
    pub save_filename: String,
}

/// Renders the dialog windows for file operations (triggered from the toolbar)
pub fn file_menu_ui(
    mut contexts: EguiContexts,
    mut menu_state: ResMut<FileMenuState>,
    mut save_events: MessageWriter<SaveThemeRequest>,
    mut new_events: MessageWriter<NewThemeRequest>,
) -> Result {
    // New theme confirmation dialog
    if menu_state.show_new_confirmation {
        egui::Window::new("New Theme")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                ui.label("Start a new theme? Unsaved changes will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Create New").clicked() {
                        new_events.write(NewThemeRequest);
                        menu_state.show_new_confirmation = false;
                    }
                    if ui.button("Cancel").clicked() {
                        menu_state.show_new_confirmation = false;
                    }
                });
            });
    }

    // Save dialog for filename
    if menu_state.show_save_name_dialog {
        egui::Window::new("Save Theme")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Theme name:");
                    ui.text_edit_singleline(&mut menu_state.save_filename);
                });
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        let filename = sanitize_filename(&menu_state.save_filename);
                        let path = crate::paths::themes_dir().join(format!("{}.json", filename));
                        save_events.write(SaveThemeRequest { path });
                        menu_state.show_save_name_dialog = false;
                    }
                    if ui.button("Cancel").clicked() {
                        menu_state.show_save_name_dialog = false;
                    }
                });
            });
    }

    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Renders the missing theme warning dialog (shown at startup if the last theme doesn't exist)
pub fn missing_theme_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<MissingThemeWarning>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    egui::Window::new("Theme Not Found")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The last opened theme file no longer exists:");

            if let Some(ref path) = warning.path {
                ui.add_space(5.0);
                let path_str = path.to_string_lossy();
                let display_path = if path_str.len() > 50 {
                    format!("...{}", &path_str[path_str.len() - 47..])
                } else {
                    path_str.to_string()
                };
                ui.label(egui::RichText::new(display_path).weak())
                    .on_hover_text(path_str.as_ref());
                ui.add_space(10.0);
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    warning.show = false;
                }

                if ui.button("Clear from history").clicked() {
                    config.data.last_theme_path = None;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                    warning.show = false;
                }
            });
        });

    Ok(())
}

/// Modal overlay shown while an async save or load is in flight
pub fn async_operation_modal_ui(
    mut contexts: EguiContexts,
    async_op: Res<AsyncThemeOperation>,
) -> Result {
    if !async_op.is_busy() {
        return Ok(());
    }

    egui::Window::new("Working")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                let description = async_op
                    .operation_description
                    .as_deref()
                    .unwrap_or("Working...");
                ui.label(description);
            });
        });

    Ok(())
}

/// Save error dialog (dismissable)
pub fn save_error_dialog_ui(
    mut contexts: EguiContexts,
    mut save_error: ResMut<ThemeSaveError>,
) -> Result {
    let Some(error) = save_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Save Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, &error);
            });
            if ui.button("OK").clicked() {
                save_error.message = None;
            }
        });

    Ok(())
}

/// Load error dialog (dismissable)
pub fn load_error_dialog_ui(
    mut contexts: EguiContexts,
    mut load_error: ResMut<ThemeLoadError>,
) -> Result {
    let Some(error) = load_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Load Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, &error);
            });
            if ui.button("OK").clicked() {
                load_error.message = None;
            }
        });

    Ok(())
}

/// Warning dialog listing section types the loaded theme uses that have
/// no registered renderer. The theme is already open; those sections
/// preview as placeholders.
pub fn load_validation_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<LoadValidationWarning>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    egui::Window::new("Unknown Sections")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("This theme uses section types with no registered renderer:");
            ui.add_space(5.0);
            for section_type in &warning.unknown_sections {
                ui.label(egui::RichText::new(format!("  {}", section_type)).monospace());
            }
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new("They will preview as placeholders.")
                    .color(egui::Color32::GRAY),
            );
            if ui.button("OK").clicked() {
                warning.show = false;
                warning.unknown_sections.clear();
                warning.theme_path = None;
            }
        });

    Ok(())
}

/// Notification shown when the config file was reset to defaults
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });

    Ok(())
}

/// Intercepts window close: clean state exits immediately, unsaved
/// edits raise the confirmation dialog instead.
pub fn handle_window_close(
    mut close_events: MessageReader<WindowCloseRequested>,
    dirty_state: Res<ThemeDirtyState>,
    mut dialog: ResMut<UnsavedChangesDialog>,
    mut exit_events: MessageWriter<AppExit>,
) {
    for _ in close_events.read() {
        if dirty_state.is_dirty {
            dialog.show_close_confirmation = true;
        } else {
            exit_events.write(AppExit::Success);
        }
    }
}

/// Confirmation dialog raised when closing the window with unsaved edits
pub fn unsaved_changes_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog: ResMut<UnsavedChangesDialog>,
    current_file: Res<CurrentThemeFile>,
    mut save_events: MessageWriter<SaveThemeRequest>,
    mut exit_events: MessageWriter<AppExit>,
) -> Result {
    if !dialog.show_close_confirmation {
        return Ok(());
    }

    egui::Window::new("Unsaved Changes")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("This theme has unsaved changes.");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                // Save-and-quit needs a known file to save to
                if let Some(path) = current_file.path.clone()
                    && ui.button("Save and Quit").clicked()
                {
                    save_events.write(SaveThemeRequest { path });
                    dialog.quit_after_save = true;
                    dialog.show_close_confirmation = false;
                }
                if ui.button("Quit Without Saving").clicked() {
                    exit_events.write(AppExit::Success);
                }
                if ui.button("Cancel").clicked() {
                    dialog.show_close_confirmation = false;
                }
            });
        });

    Ok(())
}

/// Exits once a "Save and Quit" save has completed and left the state clean
pub fn quit_after_save_system(
    mut dialog: ResMut<UnsavedChangesDialog>,
    dirty_state: Res<ThemeDirtyState>,
    async_op: Res<AsyncThemeOperation>,
    save_error: Res<ThemeSaveError>,
    mut exit_events: MessageWriter<AppExit>,
) {
    if !dialog.quit_after_save || async_op.is_busy() {
        return;
    }

    // A failed save aborts the quit so the error dialog can be seen
    if save_error.message.is_some() {
        dialog.quit_after_save = false;
        return;
    }

    if !dirty_state.is_dirty {
        exit_events.write(AppExit::Success);
    }
}

/// Opens the native file picker and dispatches a load request.
/// Called from the toolbar; blocking is acceptable for a desktop picker.
pub fn open_theme_via_picker(load_events: &mut MessageWriter<LoadThemeRequest>) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Open Theme")
        .add_filter("Theme files", &["json"])
        .set_directory(crate::paths::themes_dir())
        .pick_file()
    {
        load_events.write(LoadThemeRequest { path });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_replaces_special_chars() {
        assert_eq!(sanitize_filename("my/theme:v2"), "my_theme_v2");
        assert_eq!(sanitize_filename("  spaced  "), "spaced");
        assert_eq!(sanitize_filename("plain-name_1"), "plain-name_1");
    }
}
