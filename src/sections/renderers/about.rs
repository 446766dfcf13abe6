//! About block: heading plus a paragraph of store copy.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "About",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "heading": "Our story",
        "body": "We make considered goods for everyday life, \
                 produced in small batches by people we know.",
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(str_field(section, "heading", "Our story"))
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(str_field(section, "body", ""));
        });
}
