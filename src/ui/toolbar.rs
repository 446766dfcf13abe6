use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::builder::{BuilderAction, EditHistory};
use crate::theme::{
    AsyncThemeOperation, CurrentThemeFile, LoadThemeRequest, SaveThemeRequest, ThemeDirtyState,
};

use super::file_menu::{open_theme_via_picker, FileMenuState};

/// Main toolbar: file operations, undo/redo, and the open theme's name.
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    history: Res<EditHistory>,
    dirty_state: Res<ThemeDirtyState>,
    current_file: Res<CurrentThemeFile>,
    async_op: Res<AsyncThemeOperation>,
    mut menu_state: ResMut<FileMenuState>,
    mut actions: MessageWriter<BuilderAction>,
    mut save_events: MessageWriter<SaveThemeRequest>,
    mut load_events: MessageWriter<LoadThemeRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                if ui
                    .add(egui::Button::new("New").min_size(egui::vec2(0.0, 24.0)))
                    .clicked()
                {
                    menu_state.show_new_confirmation = true;
                }

                if ui
                    .add(egui::Button::new("Open").min_size(egui::vec2(0.0, 24.0)))
                    .clicked()
                    && !async_op.is_busy()
                {
                    open_theme_via_picker(&mut load_events);
                }

                if ui
                    .add(egui::Button::new("Save").min_size(egui::vec2(0.0, 24.0)))
                    .clicked()
                    && !async_op.is_busy()
                {
                    match &current_file.path {
                        // Re-save to the file the theme came from
                        Some(path) => {
                            save_events.write(SaveThemeRequest { path: path.clone() });
                        }
                        None => {
                            menu_state.save_filename = history
                                .present()
                                .theme
                                .as_ref()
                                .map(|t| t.name.clone())
                                .unwrap_or_default();
                            menu_state.show_save_name_dialog = true;
                        }
                    }
                }

                if ui
                    .add(egui::Button::new("Save As").min_size(egui::vec2(0.0, 24.0)))
                    .clicked()
                    && !async_op.is_busy()
                {
                    menu_state.save_filename = history
                        .present()
                        .theme
                        .as_ref()
                        .map(|t| t.name.clone())
                        .unwrap_or_default();
                    menu_state.show_save_name_dialog = true;
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let undo_label = if history.can_undo() {
                    format!("Undo ({})", history.undo_count())
                } else {
                    "Undo".to_string()
                };
                if ui
                    .add_enabled(
                        history.can_undo(),
                        egui::Button::new(undo_label).min_size(egui::vec2(0.0, 24.0)),
                    )
                    .on_hover_text("Ctrl+Z")
                    .clicked()
                {
                    actions.write(BuilderAction::Undo);
                }

                let redo_label = if history.can_redo() {
                    format!("Redo ({})", history.redo_count())
                } else {
                    "Redo".to_string()
                };
                if ui
                    .add_enabled(
                        history.can_redo(),
                        egui::Button::new(redo_label).min_size(egui::vec2(0.0, 24.0)),
                    )
                    .on_hover_text("Ctrl+Y / Ctrl+Shift+Z")
                    .clicked()
                {
                    actions.write(BuilderAction::Redo);
                }

                // Right-aligned theme name with dirty marker
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(theme) = &history.present().theme {
                        let title = if dirty_state.is_dirty {
                            format!("{} *", theme.name)
                        } else {
                            theme.name.clone()
                        };
                        ui.label(egui::RichText::new(title).size(14.0).strong());
                    } else {
                        ui.label(
                            egui::RichText::new("No theme open").color(egui::Color32::GRAY),
                        );
                    }
                });
            });
        });
    Ok(())
}
