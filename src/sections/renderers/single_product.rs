//! Single product: image placeholder, title, price, and add-to-cart.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Single Product",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "title": "Featured product",
        "price": "$49.00",
        "description": "A short product description.",
        "button_label": "Add to cart",
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                egui::Frame::group(ui.style())
                    .fill(egui::Color32::from_rgb(60, 64, 76))
                    .inner_margin(egui::Margin::symmetric(36, 44))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("product image").weak().italics());
                    });

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(str_field(section, "title", "Featured product"))
                            .size(18.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(str_field(section, "price", "$0.00")).size(15.0),
                    );
                    ui.add_space(4.0);
                    ui.label(str_field(section, "description", ""));
                    ui.add_space(8.0);
                    let _ = ui.add(
                        egui::Button::new(str_field(section, "button_label", "Add to cart"))
                            .min_size(egui::vec2(110.0, 28.0)),
                    );
                });
            });
        });
}
