use super::show_placeholder;
use crate::LessonApp;
use crate::app::quiz::Feedback;
use crate::app::tabs::TabView;
use egui::{Color32, RichText, Ui};

fn feedback_color(feedback: &Feedback) -> Color32 {
    match feedback {
        Feedback::Correct => Color32::from_rgb(60, 170, 90),
        Feedback::Incorrect { .. } => Color32::from_rgb(220, 70, 70),
        Feedback::Unanswered => Color32::from_rgb(220, 160, 40),
    }
}

pub fn ui_quiz(app: &mut LessonApp, ui: &mut Ui) {
    let mut chosen_quiz = None;

    match app.tabs.view_mut() {
        TabView::Quiz(panel) => {
            ui.horizontal_wrapped(|ui| {
                for (i, label) in panel.selectors.iter().enumerate() {
                    if ui.selectable_label(i == panel.active, label.as_str()).clicked() {
                        chosen_quiz = Some(i);
                    }
                }
            });
            ui.add_space(8.0);

            ui.heading(panel.title());

            let form = &mut panel.form;
            for (i, question) in form.quiz.questions.iter().enumerate() {
                ui.add_space(10.0);
                ui.label(RichText::new(format!("{}. {}", i + 1, question.question)).strong());
                for (j, option) in question.options.iter().enumerate() {
                    ui.radio_value(&mut form.selections[i], Some(j), option.as_str());
                }
                if let Some(feedback) = form.outcome.as_ref().and_then(|o| o.feedback.get(i)) {
                    ui.label(RichText::new(feedback.message()).color(feedback_color(feedback)));
                }
            }

            ui.add_space(12.0);
            if ui.button("Terminar quiz").clicked() {
                let outcome = form.finish();
                log::info!("[quiz] {}", outcome.summary());
            }
            if let Some(outcome) = &form.outcome {
                ui.label(RichText::new(outcome.summary()).strong().size(16.0));
            }
        }
        other => show_placeholder(ui, other),
    }

    if let Some(idx) = chosen_quiz {
        app.select_quiz(idx);
    }
}
