use super::{ai, content, exercises, quiz};
use crate::LessonApp;
use crate::app::LessonStatus;
use crate::model::Tab;
use crate::ui::helpers::{error_label, tab_bar};
use crate::ui::layout::simple_panel;
use egui::{Context, Margin, ScrollArea};

pub fn ui_lesson(app: &mut LessonApp, ctx: &Context) {
    simple_panel(ctx, 900.0, Margin::symmetric(16, 12), |ui| {
        match &app.lesson {
            LessonStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Cargando módulo…");
                });
                return;
            }
            // El error sustituye a todo el contenido
            LessonStatus::Failed(msg) => {
                error_label(ui, msg);
                return;
            }
            LessonStatus::Loaded(_) => {}
        }

        if let Some(tab) = tab_bar(ui, app.active_tab()) {
            app.select_tab(tab);
        }
        ui.separator();

        ScrollArea::vertical()
            .id_salt("lesson_content")
            .auto_shrink([false; 2])
            .show(ui, |ui| match app.active_tab() {
                Tab::Theory | Tab::Examples => content::ui_content(app, ui),
                Tab::Exercises => {
                    exercises::ui_exercises(app, ui);
                    exercises::ui_playground(app, ui);
                }
                Tab::Quiz => quiz::ui_quiz(app, ui),
                Tab::Ai => ai::ui_ai(app, ui),
            });
    });
}
