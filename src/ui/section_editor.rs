use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use serde_json::{Map, Value};

use crate::builder::{BuilderAction, EditHistory};
use crate::theme::{SectionId, SectionData};

/// Working copy of the selected section's data.
///
/// Field edits accumulate here and only reach the edit history on Apply,
/// so one history step covers a whole editing pass instead of every
/// keystroke.
#[derive(Resource, Default)]
pub struct SectionEditorState {
    section: Option<SectionId>,
    /// History revision the buffer was loaded from. Any model change
    /// (undo, redo, delete) reloads the buffer.
    revision: u64,
    buffer: Map<String, Value>,
    modified: bool,
}

impl SectionEditorState {
    fn load(&mut self, section: &SectionData, revision: u64) {
        self.section = Some(section.id);
        self.revision = revision;
        self.buffer = section.data.clone();
        self.modified = false;
    }

    fn clear(&mut self) {
        self.section = None;
        self.buffer.clear();
        self.modified = false;
    }
}

/// Right panel: edits the selected section's configuration fields.
pub fn section_editor_ui(
    mut contexts: EguiContexts,
    history: Res<EditHistory>,
    mut editor: ResMut<SectionEditorState>,
    mut actions: MessageWriter<BuilderAction>,
) -> Result {
    let present = history.present();
    let selected = present
        .selected_section
        .and_then(|id| present.page().and_then(|p| p.section(id)));

    let Some(section) = selected else {
        editor.clear();
        return Ok(());
    };

    // Reload the buffer when the selection or the underlying model changed
    if editor.section != Some(section.id) || editor.revision != history.revision() {
        editor.load(section, history.revision());
    }

    egui::SidePanel::right("section_editor")
        .default_width(260.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&section.name).strong());
            ui.label(
                egui::RichText::new(&section.section_type)
                    .color(egui::Color32::GRAY)
                    .size(11.0),
            );
            ui.add_space(4.0);
            ui.separator();

            if editor.buffer.is_empty() {
                ui.label(
                    egui::RichText::new("This section has no configurable fields")
                        .color(egui::Color32::GRAY)
                        .size(11.0),
                );
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                let keys: Vec<String> = editor.buffer.keys().cloned().collect();
                for key in keys {
                    let Some(value) = editor.buffer.get_mut(&key) else {
                        continue;
                    };
                    if edit_field(ui, &key, value) {
                        editor.modified = true;
                    }
                    ui.add_space(6.0);
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(editor.modified, egui::Button::new("Apply"))
                    .clicked()
                {
                    actions.write(BuilderAction::UpdateSection {
                        id: section.id,
                        data: editor.buffer.clone(),
                    });
                    editor.modified = false;
                }
                if ui
                    .add_enabled(editor.modified, egui::Button::new("Revert"))
                    .clicked()
                {
                    editor.buffer = section.data.clone();
                    editor.modified = false;
                }
            });
        });
    Ok(())
}

/// Renders an editor widget for one data field. Returns true if the
/// value changed this frame.
fn edit_field(ui: &mut egui::Ui, key: &str, value: &mut Value) -> bool {
    ui.label(field_label(key));

    match value {
        Value::String(text) => ui.text_edit_singleline(text).changed(),
        Value::Bool(flag) => ui.checkbox(flag, "").changed(),
        Value::Number(number) => {
            if let Some(mut int) = number.as_i64() {
                if ui.add(egui::DragValue::new(&mut int).speed(1)).changed() {
                    *value = Value::from(int);
                    return true;
                }
                false
            } else if let Some(mut float) = number.as_f64() {
                if ui
                    .add(egui::DragValue::new(&mut float).speed(0.1))
                    .changed()
                {
                    *value = Value::from(float);
                    return true;
                }
                false
            } else {
                false
            }
        }
        Value::Array(items) => {
            let mut changed = false;
            for item in items.iter_mut() {
                if let Value::String(text) = item {
                    changed |= ui.text_edit_singleline(text).changed();
                } else {
                    ui.label(egui::RichText::new(item.to_string()).monospace().size(11.0));
                }
            }
            changed
        }
        // Objects and nulls are shown read-only
        other => {
            ui.label(egui::RichText::new(other.to_string()).monospace().size(11.0));
            false
        }
    }
}

/// "hero_title" -> "Hero title"
fn field_label(key: &str) -> String {
    let mut label = key.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_label_humanizes_keys() {
        assert_eq!(field_label("hero_title"), "Hero title");
        assert_eq!(field_label("cta"), "Cta");
        assert_eq!(field_label(""), "");
    }
}
