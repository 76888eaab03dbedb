mod helpers;
pub mod layout;
pub mod views;

use crate::app::LessonApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for LessonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuestas del backend que hayan llegado desde el último frame
        self.poll();

        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Lesson => views::lesson::ui_lesson(self, ctx),
        }

        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
