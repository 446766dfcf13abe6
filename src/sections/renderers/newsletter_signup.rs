//! Newsletter signup: prompt, mock email field, and a submit button.

use bevy_egui::egui;
use serde_json::{json, Map, Value};

use crate::theme::SectionData;

use super::super::registry::{SectionDefinition, SectionRenderer};
use super::{object, str_field};

pub fn definition() -> SectionDefinition {
    SectionDefinition {
        display_name: "Newsletter Signup",
        renderer: SectionRenderer { render },
        default_data,
    }
}

fn default_data() -> Map<String, Value> {
    object(json!({
        "prompt": "Join our newsletter",
        "placeholder": "you@example.com",
        "button_label": "Subscribe",
    }))
}

fn render(ui: &mut egui::Ui, section: &SectionData) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(42, 46, 58))
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(str_field(section, "prompt", "Join our newsletter"))
                        .size(16.0)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    // Preview only: the field is a static mock
                    ui.add_enabled(
                        false,
                        egui::TextEdit::singleline(&mut String::new())
                            .hint_text(str_field(section, "placeholder", "you@example.com"))
                            .desired_width(200.0),
                    );
                    let _ = ui.button(str_field(section, "button_label", "Subscribe"));
                });
            });
        });
}
