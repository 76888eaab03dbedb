use super::show_placeholder;
use crate::LessonApp;
use crate::app::tabs::TabView;
use crate::ui::layout::{code_block, code_editor_input, two_button_row};
use egui::{Frame, RichText, TextStyle, Ui};

pub fn ui_exercises(app: &mut LessonApp, ui: &mut Ui) {
    let mut toggled = None;
    match app.tabs.view() {
        TabView::Exercises(list) => {
            for (idx, item) in list.items.iter().enumerate() {
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(format!("{}. {}", idx + 1, item.prompt)).strong());
                    let label = if item.revealed {
                        "Ocultar solución"
                    } else {
                        "Mostrar solución"
                    };
                    if ui.small_button(label).clicked() {
                        toggled = Some(idx);
                    }
                    if item.revealed {
                        code_block(ui, &item.solution);
                    }
                });
                ui.add_space(6.0);
            }
        }
        other => show_placeholder(ui, other),
    }

    if let Some(idx) = toggled {
        app.toggle_solution(idx);
    }
}

/// Editor y salida. Solo existe mientras la pestaña de ejercicios está activa.
pub fn ui_playground(app: &mut LessonApp, ui: &mut Ui) {
    if !app.playground.is_ready() {
        return;
    }

    ui.add_space(12.0);
    ui.separator();
    ui.strong("Editor de código");

    let fontsize = TextStyle::Monospace.resolve(ui.style()).size;
    let width = ui.available_width();
    code_editor_input(
        ui,
        "playground_editor",
        width,
        12,
        fontsize,
        &mut app.playground.editor,
        280.0,
    );

    ui.add_space(6.0);
    let running = app.playground.is_running();
    let run_label = if running { "⏳ Ejecutando…" } else { "▶ Ejecutar" };
    let (run, clear) = two_button_row(ui, run_label, "Limpiar salida", !running);

    ui.add_space(6.0);
    ui.strong("Salida");
    code_block(ui, &app.playground.output);

    if run {
        app.run_code();
    }
    if clear {
        app.clear_output();
    }
}
