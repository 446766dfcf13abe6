//! Placeholder block for sections whose renderer is not resolved.
//!
//! Shown when a theme references a section type with no registered
//! renderer, or while a resolution cycle is still in flight. The rest of
//! the canvas keeps rendering normally.

use bevy_egui::egui;

use crate::theme::SectionData;

/// Draw a visually distinct "missing renderer" block naming the type.
pub fn render_placeholder(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(200, 50, 50)))
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 50, 50),
                    egui::RichText::new(format!(
                        "Missing section renderer: {}",
                        section.section_type
                    ))
                    .strong(),
                );
                ui.label(
                    egui::RichText::new("This section cannot be previewed.")
                        .weak()
                        .size(11.0),
                );
            });
        });
}
