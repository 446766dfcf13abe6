//! Featured collections: a row of named collection cards.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field, str_list};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Featured Collections",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "heading": "Shop by collection",
        "collections": ["New Arrivals", "Best Sellers", "Sale"],
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(str_field(section, "heading", "Shop by collection"))
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(8.0);

            let collections = str_list(section, "collections");
            ui.horizontal_wrapped(|ui| {
                for name in collections {
                    egui::Frame::group(ui.style())
                        .fill(egui::Color32::from_rgb(48, 52, 64))
                        .inner_margin(egui::Margin::symmetric(16, 24))
                        .show(ui, |ui| {
                            ui.set_min_width(110.0);
                            ui.vertical_centered(|ui| {
                                ui.label(egui::RichText::new(name).strong());
                            });
                        });
                }
            });
        });
}
