use crate::app::dispatch::AskRequest;
use crate::error::Result;
use crate::markup::{MessageBlock, assistant_blocks, assistant_html, user_html};
use crate::transport::HttpReply;
use serde::Deserialize;

pub const SEND_LABEL: &str = "Enviar";
pub const BUSY_LABEL: &str = "Pensando…";
pub const NO_ANSWER: &str = "No se recibió respuesta";
pub const CONNECTION_ERROR_PREFIX: &str = "❌ Error de conexión con el servidor: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    /// El texto del usuario va tal cual; el del asistente separa los bloques de código.
    pub fn blocks(&self) -> Vec<MessageBlock> {
        match self.role {
            Role::User => vec![MessageBlock::Text(self.text.clone())],
            Role::Assistant => assistant_blocks(&self.text),
        }
    }

    pub fn html(&self) -> String {
        match self.role {
            Role::User => user_html(&self.text),
            Role::Assistant => assistant_html(&self.text),
        }
    }
}

#[derive(Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Deserialize)]
struct AnswerBody {
    #[serde(default)]
    answer: Option<String>,
}

fn detail_of(reply: &HttpReply) -> Option<String> {
    serde_json::from_str::<DetailBody>(&reply.body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

/// Mensaje del asistente para cualquier desenlace de `/ask_ai`.
pub fn answer_text(result: Result<HttpReply>) -> String {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => return format!("{CONNECTION_ERROR_PREFIX}{err}"),
    };

    if reply.status == 429 {
        let detail = detail_of(&reply).unwrap_or_else(|| reply.status_text.clone());
        return format!("❗ {detail}");
    }

    if !reply.is_success() {
        let detail = detail_of(&reply).unwrap_or_else(|| reply.status_text.clone());
        return format!("❌ Error: {detail}");
    }

    match serde_json::from_str::<AnswerBody>(&reply.body) {
        Ok(body) => body
            .answer
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| NO_ANSWER.to_string()),
        Err(err) => format!("{CONNECTION_ERROR_PREFIX}{err}"),
    }
}

/// Conversación con el asistente de la lección actual. Se reinicia al volver a la pestaña.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    pub transcript: Vec<ChatMessage>,
    pub input: String,
    lesson_id: u32,
    generation: u64,
    sending: bool,
    focus_requested: bool,
}

impl ChatSession {
    pub fn new(lesson_id: u32) -> Self {
        Self {
            transcript: Vec::new(),
            input: String::new(),
            lesson_id,
            generation: 0,
            sending: false,
            focus_requested: false,
        }
    }

    pub fn reset(&mut self, lesson_id: u32) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::new(lesson_id)
        };
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn send_label(&self) -> &'static str {
        if self.sending { BUSY_LABEL } else { SEND_LABEL }
    }

    /// Envía lo que haya en `input`. No hace nada si está vacío o si ya hay una pregunta en vuelo.
    pub fn ask(&mut self) -> Option<AskRequest> {
        if self.sending {
            return None;
        }
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return None;
        }

        self.input.clear();
        self.transcript.push(ChatMessage {
            role: Role::User,
            text: question.clone(),
        });
        self.sending = true;

        Some(AskRequest {
            generation: self.generation,
            question,
            module_id: self.lesson_id,
        })
    }

    /// Añade la respuesta y cierra la petición. `false` si era de una sesión anterior.
    pub fn apply(&mut self, generation: u64, result: Result<HttpReply>) -> bool {
        if generation != self.generation {
            return false;
        }
        let text = answer_text(result);
        self.transcript.push(ChatMessage {
            role: Role::Assistant,
            text,
        });
        self.finalize();
        true
    }

    fn finalize(&mut self) {
        self.sending = false;
        self.focus_requested = true;
    }

    /// La vista lo consulta una vez por frame para devolver el foco al cuadro de texto.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    fn asked(question: &str) -> (ChatSession, AskRequest) {
        let mut chat = ChatSession::new(4);
        chat.input = question.to_string();
        let request = chat.ask().unwrap();
        (chat, request)
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut chat = ChatSession::new(1);
        chat.input = "   \n".into();
        assert!(chat.ask().is_none());
        assert!(chat.transcript.is_empty());
        assert!(!chat.is_sending());
    }

    #[test]
    fn asking_appends_user_message_and_disables_send() {
        let (chat, request) = asked("  ¿Qué es un diccionario?  ");
        assert_eq!(request.question, "¿Qué es un diccionario?");
        assert_eq!(request.module_id, 4);
        assert_eq!(chat.transcript.len(), 1);
        assert_eq!(chat.transcript[0].role, Role::User);
        assert!(chat.input.is_empty());
        assert!(chat.is_sending());
        assert_eq!(chat.send_label(), BUSY_LABEL);
    }

    #[test]
    fn rate_limit_appends_one_warning_and_reenables_send() {
        let (mut chat, request) = asked("hola");
        let reply = HttpReply::new(429, "Too Many Requests", r#"{"detail":"limit reached"}"#);
        assert!(chat.apply(request.generation, Ok(reply)));

        assert_eq!(chat.transcript.len(), 2);
        let last = &chat.transcript[1];
        assert_eq!(last.role, Role::Assistant);
        assert!(last.text.contains("limit reached"));
        assert!(last.text.starts_with('❗'));
        assert!(!chat.is_sending());
        assert_eq!(chat.send_label(), SEND_LABEL);
        assert!(chat.take_focus_request());
        assert!(!chat.take_focus_request());
    }

    #[test]
    fn transport_failure_appends_one_connection_error() {
        let (mut chat, request) = asked("hola");
        chat.input = "otra vez".into();
        assert!(chat.ask().is_none(), "send is gated while a question is in flight");

        chat.apply(
            request.generation,
            Err(FetchError::Transport("connection refused".into())),
        );
        let answers: Vec<_> = chat
            .transcript
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .collect();
        assert_eq!(answers.len(), 1);
        assert!(answers[0].text.starts_with(CONNECTION_ERROR_PREFIX));
        assert!(answers[0].text.contains("connection refused"));
        assert!(!chat.is_sending());
    }

    #[test]
    fn server_error_uses_detail_or_status_text() {
        let with_detail = HttpReply::new(500, "Internal Server Error", r#"{"detail":"model down"}"#);
        assert_eq!(answer_text(Ok(with_detail)), "❌ Error: model down");

        let unparseable = HttpReply::new(502, "Bad Gateway", "<html>");
        assert_eq!(answer_text(Ok(unparseable)), "❌ Error: Bad Gateway");

        let empty_detail = HttpReply::new(400, "Bad Request", "{}");
        assert_eq!(answer_text(Ok(empty_detail)), "❌ Error: Bad Request");
    }

    #[test]
    fn success_uses_answer_or_fallback() {
        let ok = HttpReply::new(200, "OK", r#"{"answer":"Una lista es..."}"#);
        assert_eq!(answer_text(Ok(ok)), "Una lista es...");

        let missing = HttpReply::new(200, "OK", "{}");
        assert_eq!(answer_text(Ok(missing)), NO_ANSWER);
    }

    #[test]
    fn stale_answers_are_dropped_after_reset() {
        let (mut chat, request) = asked("hola");
        chat.reset(4);
        assert!(!chat.apply(request.generation, Ok(HttpReply::new(200, "OK", r#"{"answer":"x"}"#))));
        assert!(chat.transcript.is_empty());
        assert!(!chat.is_sending());
    }

    #[test]
    fn user_messages_are_plain_text() {
        let msg = ChatMessage {
            role: Role::User,
            text: "```\n<b>x</b>\n```".into(),
        };
        assert_eq!(msg.blocks(), vec![MessageBlock::Text(msg.text.clone())]);
        assert!(msg.html().contains("&lt;b&gt;"));
    }

    #[test]
    fn assistant_messages_render_code_blocks() {
        let msg = ChatMessage {
            role: Role::Assistant,
            text: "Así:\n```python\nprint(1)\n```".into(),
        };
        assert_eq!(msg.blocks().len(), 2);
        assert!(msg.html().starts_with("<div dir=\"ltr\">"));
    }
}
