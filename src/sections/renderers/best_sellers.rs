//! Best sellers: a grid of product cards.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{i64_field, object, str_field};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Best Sellers",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "heading": "Best sellers",
        "count": 4,
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    // Clamp so a bad value can't flood the canvas with cards
    let count = i64_field(section, "count", 4).clamp(1, 12);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(str_field(section, "heading", "Best sellers"))
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for index in 0..count {
                    egui::Frame::group(ui.style())
                        .fill(egui::Color32::from_rgb(48, 52, 64))
                        .inner_margin(egui::Margin::symmetric(14, 18))
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(format!("Product {}", index + 1)));
                                ui.label(
                                    egui::RichText::new("$ --")
                                        .weak()
                                        .size(12.0),
                                );
                            });
                        });
                }
            });
        });
}
