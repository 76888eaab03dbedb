use crate::LessonApp;
use crate::app::chat::{ChatMessage, Role};
use crate::markup::MessageBlock;
use crate::ui::helpers::muted_label;
use crate::ui::layout::code_block;
use egui::{Button, Frame, Key, RichText, ScrollArea, TextEdit, Ui};

fn message_bubble(ui: &mut Ui, message: &ChatMessage) {
    let (fill, who) = match message.role {
        Role::User => (ui.visuals().faint_bg_color, "Tú"),
        Role::Assistant => (ui.visuals().extreme_bg_color, "IA"),
    };
    Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(who).small().weak());
        for block in message.blocks() {
            match block {
                MessageBlock::Text(text) => {
                    ui.label(text);
                }
                MessageBlock::Code(code) => code_block(ui, &code),
            }
        }
    });
    ui.add_space(4.0);
}

pub fn ui_ai(app: &mut LessonApp, ui: &mut Ui) {
    ui.heading("Pregunta a la IA sobre este módulo");
    ui.add_space(6.0);

    ScrollArea::vertical()
        .id_salt("ai_messages")
        .max_height(340.0)
        .stick_to_bottom(true)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for message in &app.chat.transcript {
                message_bubble(ui, message);
            }
        });

    ui.add_space(8.0);
    let response = ui.add(
        TextEdit::multiline(&mut app.chat.input)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text("Escribe tu pregunta… (Ctrl+Enter para enviar)"),
    );
    let shortcut =
        response.has_focus() && ui.input(|i| i.modifiers.command && i.key_pressed(Key::Enter));
    if app.chat.take_focus_request() {
        response.request_focus();
    }

    let mut send = false;
    ui.horizontal(|ui| {
        send = ui
            .add_enabled(!app.chat.is_sending(), Button::new(app.chat.send_label()))
            .clicked();
        muted_label(ui, &app.config.ai_hint);
    });

    if send || shortcut {
        app.send_question();
    }
}
