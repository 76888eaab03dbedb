use crate::LessonApp;
use crate::app::home::IndexStatus;
use crate::ui::helpers::{big_list_button, error_label, muted_label};
use crate::ui::layout::simple_panel;
use crate::view_models::LessonRow;
use egui::{Context, Margin, RichText, ScrollArea};

pub fn ui_home(app: &mut LessonApp, ctx: &Context) {
    simple_panel(ctx, 700.0, Margin::symmetric(24, 16), |ui| {
        ui.heading("Módulos");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("🔍 Buscar:");
            ui.text_edit_singleline(&mut app.home.search);
        });

        let levels = app.home.levels();
        ui.horizontal_wrapped(|ui| {
            if ui
                .selectable_label(app.home.level_filter.is_none(), "Todos")
                .clicked()
            {
                app.home.level_filter = None;
            }
            for level in levels {
                let active = app.home.level_filter.as_deref() == Some(level.as_str());
                if ui.selectable_label(active, level.as_str()).clicked() {
                    app.home.level_filter = Some(level);
                }
            }
        });
        ui.separator();

        let mut open = None;
        match &app.home.status {
            IndexStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Cargando módulos…");
                });
            }
            IndexStatus::Failed(msg) => error_label(ui, msg),
            IndexStatus::Loaded => {
                let groups = app.home.grouped();
                if groups.is_empty() {
                    muted_label(ui, "No se encontraron módulos");
                }
                ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let width = ui.available_width();
                        for group in groups {
                            ui.add_space(6.0);
                            ui.label(RichText::new(group.level.as_str()).strong().size(18.0));
                            for entry in group.entries {
                                let row = LessonRow::from_entry(entry);
                                if big_list_button(ui, row.label(), width, 32.0, true) {
                                    open = Some(row.id);
                                }
                            }
                        }
                    });
            }
        }

        if let Some(id) = open {
            app.open_lesson(id);
        }
    });
}
