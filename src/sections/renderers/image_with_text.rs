//! Image with text: an image placeholder beside a text column.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Image With Text",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "heading": "Made to last",
        "body": "Every piece is cut, sewn, and finished by hand.",
        "image": "lifestyle.jpg",
        "image_side": "left",
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    let image_name = str_field(section, "image", "image");
    let image_left = str_field(section, "image_side", "left") != "right";

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let image_block = |ui: &mut egui::Ui| {
                    egui::Frame::group(ui.style())
                        .fill(egui::Color32::from_rgb(60, 64, 76))
                        .inner_margin(egui::Margin::symmetric(32, 40))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(image_name).weak().italics());
                        });
                };
                let text_block = |ui: &mut egui::Ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(str_field(section, "heading", "Made to last"))
                                .size(18.0)
                                .strong(),
                        );
                        ui.add_space(4.0);
                        ui.label(str_field(section, "body", ""));
                    });
                };

                if image_left {
                    image_block(ui);
                    text_block(ui);
                } else {
                    text_block(ui);
                    image_block(ui);
                }
            });
        });
}
