use crate::app::LessonApp;
use crate::app::playground::EditorState;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui, Visuals};
use egui_code_editor::CodeEditor;

pub fn top_panel(app: &mut LessonApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Inicio").clicked() {
                app.go_home();
            }

            if app.state != AppState::Lesson {
                return;
            }

            let nav = app.nav_buttons();
            if nav.show_prev && ui.button("⬅ Anterior").clicked() {
                app.go_prev();
            }
            if nav.show_next && ui.button("Siguiente ➡").clicked() {
                app.go_next();
            }

            ui.separator();
            ui.heading(app.lesson_title());
            ui.label(RichText::new(app.lesson_badge()).weak());
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

pub fn simple_panel(
    ctx: &Context,
    max_width: f32,
    margin: egui::Margin,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(margin)
            .show(ui, |ui| {
                ui.set_width(w);
                inner(ui);
            });
    });
}

/// Editor del playground con ancho fijo.
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    fontsize: f32,
    editor: &mut EditorState,
    max_height: f32,
) {
    let syntax = editor.syntax();
    let theme = editor.color_theme();
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(theme)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, &mut editor.text);
        });
}

/// Bloque de código de solo lectura (ejemplos, soluciones, salida, chat).
pub fn code_block(ui: &mut Ui, code: &str) {
    Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(code).monospace());
        });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    left_label: &str,
    right_label: &str,
    left_enabled: bool,
) -> (bool, bool) {
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left_enabled, Button::new(left_label).min_size(egui::vec2(120.0, 30.0)))
            .clicked();
        clicked_right = ui
            .add_sized([120.0, 30.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
