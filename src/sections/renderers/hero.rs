//! Hero banner: large heading, subheading, and a call-to-action button.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Hero",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "title": "Welcome to our store",
        "subtitle": "Discover the new collection",
        "cta_label": "Shop now",
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(38, 42, 54))
        .inner_margin(egui::Margin::symmetric(24, 32))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(str_field(section, "title", "Welcome to our store"))
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(str_field(
                        section,
                        "subtitle",
                        "Discover the new collection",
                    ))
                    .size(15.0)
                    .color(egui::Color32::LIGHT_GRAY),
                );
                ui.add_space(12.0);
                let _ = ui.add(
                    egui::Button::new(
                        egui::RichText::new(str_field(section, "cta_label", "Shop now")).strong(),
                    )
                    .min_size(egui::vec2(120.0, 32.0)),
                );
            });
        });
}
