pub mod ai;
pub mod content;
pub mod exercises;
pub mod home;
pub mod lesson;
pub mod quiz;

use crate::app::tabs::TabView;
use crate::ui::helpers::muted_label;
use egui::Ui;

/// Pinta el texto de relleno si la pestaña no tiene contenido propio.
pub(crate) fn show_placeholder(ui: &mut Ui, view: &TabView) {
    match view {
        TabView::Placeholder(text) => muted_label(ui, text),
        TabView::Empty => muted_label(ui, "Elige una pestaña para ver el contenido."),
        _ => {}
    }
}
