use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::builder::{BuilderAction, EditHistory};
use crate::sections::{render_placeholder, ResolvedSections};
use crate::theme::SectionData;

/// Central canvas: previews the active page's sections in storefront
/// order, with per-section select, reorder, and delete controls.
pub fn canvas_ui(
    mut contexts: EguiContexts,
    history: Res<EditHistory>,
    resolved: Res<ResolvedSections>,
    mut actions: MessageWriter<BuilderAction>,
) -> Result {
    egui::CentralPanel::default().show(contexts.ctx_mut()?, |ui| {
        let present = history.present();
        let Some(page) = present.page() else {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("Open or create a theme to start building").weak());
            });
            return;
        };

        if page.body.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("This page is empty. Add a section from the left panel.")
                        .weak(),
                );
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            let section_count = page.body.len();
            for (index, section) in page.body.iter().enumerate() {
                let is_selected = present.selected_section == Some(section.id);

                let frame = if is_selected {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .stroke(egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE))
                } else {
                    egui::Frame::group(ui.style()).inner_margin(egui::Margin::symmetric(10, 8))
                };

                frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let header = format!("{}  ·  {}", section.name, section.section_type);
                        if ui.selectable_label(is_selected, header).clicked() {
                            let next = if is_selected { None } else { Some(section.id) };
                            actions.write(BuilderAction::SelectSection(next));
                        }

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .add(egui::Button::new("✕").min_size(egui::vec2(22.0, 22.0)))
                                    .on_hover_text("Delete section")
                                    .clicked()
                                {
                                    actions.write(BuilderAction::DeleteSection(section.id));
                                }

                                if ui
                                    .add_enabled(
                                        index + 1 < section_count,
                                        egui::Button::new("▼").min_size(egui::vec2(22.0, 22.0)),
                                    )
                                    .on_hover_text("Move down")
                                    .clicked()
                                {
                                    actions.write(BuilderAction::ReorderSections(swapped(
                                        &page.body,
                                        index,
                                        index + 1,
                                    )));
                                }

                                if ui
                                    .add_enabled(
                                        index > 0,
                                        egui::Button::new("▲").min_size(egui::vec2(22.0, 22.0)),
                                    )
                                    .on_hover_text("Move up")
                                    .clicked()
                                {
                                    actions.write(BuilderAction::ReorderSections(swapped(
                                        &page.body,
                                        index - 1,
                                        index,
                                    )));
                                }
                            },
                        );
                    });

                    ui.separator();

                    match resolved.renderer_for(&section.section_type) {
                        Some(renderer) => (renderer.render)(ui, section),
                        None => render_placeholder(ui, section),
                    }
                });

                ui.add_space(6.0);
            }
        });
    });
    Ok(())
}

/// The page body with two adjacent entries exchanged.
fn swapped(body: &[SectionData], a: usize, b: usize) -> Vec<SectionData> {
    let mut next = body.to_vec();
    next.swap(a, b);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SectionId;
    use serde_json::Map;

    fn section(id: u64) -> SectionData {
        SectionData {
            id: SectionId(id),
            section_type: "hero".to_string(),
            name: "Hero".to_string(),
            data: Map::new(),
        }
    }

    #[test]
    fn test_swapped_exchanges_adjacent_entries() {
        let body = vec![section(1), section(2), section(3)];
        let next = swapped(&body, 0, 1);
        let ids: Vec<u64> = next.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        // Original order untouched
        assert_eq!(body[0].id, SectionId(1));
    }
}
