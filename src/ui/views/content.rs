use super::show_placeholder;
use crate::LessonApp;
use crate::app::tabs::TabView;
use crate::markup::html_to_text;
use crate::ui::layout::code_block;
use egui::Ui;

/// Teoría y ejemplos: solo lectura.
pub fn ui_content(app: &LessonApp, ui: &mut Ui) {
    match app.tabs.view() {
        TabView::Theory(markup) => {
            ui.label(html_to_text(markup));
        }
        TabView::Examples(examples) => {
            for example in examples {
                code_block(ui, &html_to_text(example));
                ui.add_space(8.0);
            }
        }
        other => show_placeholder(ui, other),
    }
}
