// src/ui/helpers.rs
use crate::model::Tab;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Barra de pestañas. Devuelve la pestaña pulsada (aunque sea la activa).
pub fn tab_bar(ui: &mut Ui, active: Tab) -> Option<Tab> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            if ui.selectable_label(tab == active, tab.label()).clicked() {
                clicked = Some(tab);
            }
        }
    });
    clicked
}

pub fn error_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::from_rgb(220, 70, 70)));
}

pub fn muted_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).weak());
}
