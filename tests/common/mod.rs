#![allow(dead_code)]

use lesson_viewer::LessonApp;
use lesson_viewer::app::dispatch::InlineExecutor;
use lesson_viewer::config::ViewerConfig;
use lesson_viewer::error::{FetchError, Result};
use lesson_viewer::transport::{HttpReply, Transport};
use std::sync::{Arc, Mutex};

pub const INDEX_WRAPPED: &str = r#"{"modules": [
    {"id": 1, "title": "Introducción", "level": "Principiante"},
    {"id": 2, "title": "Variables", "level": "Principiante"},
    {"id": 3, "title": "Clases", "level": "Avanzado"}
]}"#;

pub const INDEX_BARE: &str = r#"[
    {"id": 1, "title": "Introducción"},
    {"id": 2, "title": "Variables"}
]"#;

pub fn lesson_json(id: u32, title: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "title": "{title}",
            "theoryHTML": "<p>Teoría del módulo {id}</p>",
            "examples": ["print({id})"],
            "exercises": [
                "Imprime tu nombre",
                {{"question": "Suma dos números", "solution": "print(1 + 1)"}}
            ],
            "quizzes": [
                {{
                    "title": "Repaso",
                    "questions": [
                        {{"question": "¿2 + 2?", "options": ["3", "4", "5"], "answer": 1}},
                        {{"question": "¿Tipo de 'a'?", "options": ["str", "int"], "answer": 0}}
                    ]
                }}
            ]
        }}"#
    )
}

pub fn ok(body: &str) -> Result<HttpReply> {
    Ok(HttpReply::new(200, "OK", body))
}

pub fn status(code: u16, text: &str, body: &str) -> Result<HttpReply> {
    Ok(HttpReply::new(code, text, body))
}

pub fn offline() -> Result<HttpReply> {
    Err(FetchError::Transport("connection refused".into()))
}

/// Backend falso: la primera ruta cuyo fragmento aparezca en la URL responde.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<Vec<(String, Result<HttpReply>)>>,
    posts: Mutex<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Sustituye la respuesta si la ruta ya existía.
    pub fn route(&self, fragment: &str, reply: Result<HttpReply>) {
        let mut routes = self.routes.lock().unwrap();
        routes.retain(|(f, _)| f != fragment);
        routes.push((fragment.to_string(), reply));
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    fn reply_for(&self, url: &str) -> Result<HttpReply> {
        self.routes
            .lock()
            .unwrap()
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| status(404, "Not Found", ""))
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<HttpReply> {
        self.reply_for(url)
    }

    fn post_json(&self, url: &str, body: String) -> Result<HttpReply> {
        self.posts.lock().unwrap().push((url.to_string(), body));
        self.reply_for(url)
    }
}

/// Backend con índice de tres módulos y las lecciones 1 a 3.
pub fn standard_backend() -> Arc<ScriptedTransport> {
    let transport = ScriptedTransport::new();
    transport.route("index.json", ok(INDEX_WRAPPED));
    transport.route("module-1/", ok(&lesson_json(1, "Introducción")));
    transport.route("module-2/", ok(&lesson_json(2, "Variables")));
    transport.route("module-3/", ok(&lesson_json(3, "Clases")));
    transport
}

/// App con ejecución síncrona; hay que llamar a `poll` para aplicar las respuestas.
pub fn app_with(transport: Arc<ScriptedTransport>, start_id: u32) -> LessonApp {
    let config = ViewerConfig {
        base_url: "http://lessons.test".into(),
        ..ViewerConfig::default()
    };
    LessonApp::new(config, transport, Box::new(InlineExecutor), start_id)
}
