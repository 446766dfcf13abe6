use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::builder::{BuilderAction, EditHistory};
use crate::sections::SectionRegistry;
use crate::theme::{SectionData, SectionIdAllocator};

/// Left panel: page navigation and the add-section palette for the
/// active page.
pub fn pages_panel_ui(
    mut contexts: EguiContexts,
    history: Res<EditHistory>,
    registry: Res<SectionRegistry>,
    mut allocator: ResMut<SectionIdAllocator>,
    mut actions: MessageWriter<BuilderAction>,
) -> Result {
    egui::SidePanel::left("pages_panel")
        .default_width(220.0)
        .show(contexts.ctx_mut()?, |ui| {
            let present = history.present();
            let Some(theme) = &present.theme else {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("No theme open").color(egui::Color32::GRAY));
                ui.label(
                    egui::RichText::new("Use New or Open to get started.")
                        .color(egui::Color32::GRAY)
                        .size(11.0),
                );
                return;
            };

            ui.add_space(4.0);
            ui.label(egui::RichText::new("Pages").strong());
            ui.add_space(4.0);

            for page in &theme.pages {
                let is_active = present.page_id == Some(page.id);
                let label = format!("{} ({})", page.name, page.body.len());
                if ui.selectable_label(is_active, label).clicked() && !is_active {
                    actions.write(BuilderAction::SelectPage(page.id));
                }
            }

            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            ui.label(egui::RichText::new("Add Section").strong());
            ui.add_space(4.0);

            if present.available_sections.is_empty() {
                ui.label(
                    egui::RichText::new("No sections available for this page")
                        .color(egui::Color32::GRAY)
                        .size(11.0),
                );
            }

            let page = present.page();
            for section_type in &present.available_sections {
                ui.horizontal(|ui| {
                    let known = registry.contains(section_type);
                    let display_name = registry.display_name_for(section_type);

                    if ui
                        .add_enabled(
                            known,
                            egui::Button::new("+").min_size(egui::vec2(22.0, 22.0)),
                        )
                        .on_hover_text(format!("Add {}", display_name))
                        .clicked()
                    {
                        // Author presets win over the registry defaults.
                        let data = page
                            .and_then(|p| p.preset_for(section_type))
                            .map(|preset| preset.data.clone())
                            .unwrap_or_else(|| registry.default_data_for(section_type));

                        actions.write(BuilderAction::AddSection(SectionData {
                            id: allocator.allocate(),
                            section_type: section_type.clone(),
                            name: display_name.to_string(),
                            data,
                        }));
                    }

                    if known {
                        ui.label(display_name);
                    } else {
                        ui.label(egui::RichText::new(display_name).color(egui::Color32::GRAY))
                            .on_hover_text("No renderer registered for this type");
                    }
                });
            }
        });
    Ok(())
}
