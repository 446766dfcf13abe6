//! Footer: link columns and a copyright line.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field, str_list};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Footer",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "links": ["Shipping", "Returns", "Contact", "FAQ"],
        "copyright": "© 2026 Example Store",
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(32, 34, 42))
        .inner_margin(egui::Margin::symmetric(24, 16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for link in str_list(section, "links") {
                    let _ = ui.link(link);
                    ui.add_space(8.0);
                }
            });
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(str_field(section, "copyright", ""))
                    .weak()
                    .size(11.0),
            );
        });
}
