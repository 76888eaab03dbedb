// src/data.rs

use crate::config::ViewerConfig;
use crate::error::{FetchError, Result};
use crate::model::{IndexEntry, Lesson};
use crate::transport::{HttpReply, Transport};
use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const INDEX_PATH: &str = "/static/content/index.json";

/// Carga el índice y las lecciones desde el servidor de contenidos.
#[derive(Clone)]
pub struct ContentFetcher {
    transport: Arc<dyn Transport>,
    config: ViewerConfig,
}

fn cache_buster() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

impl ContentFetcher {
    pub fn new(transport: Arc<dyn Transport>, config: ViewerConfig) -> Self {
        Self { transport, config }
    }

    pub fn index_url(&self, ts: u128) -> String {
        format!("{}?ts={ts}", self.config.endpoint(INDEX_PATH))
    }

    pub fn lesson_url(&self, id: u32, ts: u128) -> String {
        let path = format!("/static/content/module-{id}/module.json");
        format!("{}?ts={ts}", self.config.endpoint(&path))
    }

    pub fn load_index(&self) -> Result<Vec<IndexEntry>> {
        let url = self.index_url(cache_buster());
        log::debug!("[index] fetching {url}");
        let body = checked_body(self.transport.get(&url)?, "index.json")?;
        let value: Value = serde_json::from_str(&body)?;
        normalize_index(value)
    }

    pub fn load_lesson(&self, id: u32) -> Result<Lesson> {
        let url = self.lesson_url(id, cache_buster());
        log::debug!("[module] fetching {url}");
        let body = checked_body(self.transport.get(&url)?, "module.json")?;
        let lesson: Lesson = serde_json::from_str(&body)?;
        validate_lesson(&lesson)?;
        Ok(lesson)
    }
}

fn checked_body(reply: HttpReply, what: &str) -> Result<String> {
    if !reply.is_success() {
        return Err(FetchError::Http {
            status: reply.status,
            status_text: reply.status_text,
        });
    }
    if reply.body.trim().is_empty() {
        return Err(FetchError::Empty(what.to_string()));
    }
    Ok(reply.body)
}

/// Acepta tanto `[...]` como `{"modules": [...]}`.
pub fn normalize_index(value: Value) -> Result<Vec<IndexEntry>> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut obj) => match obj.remove("modules") {
            Some(modules @ Value::Array(_)) => modules,
            _ => return Err(FetchError::Format("index.json sin lista `modules`".into())),
        },
        _ => return Err(FetchError::Format("index.json no es una lista".into())),
    };
    Ok(serde_json::from_value(list)?)
}

/// Rechaza quizzes cuyo índice de respuesta no apunta a ninguna opción.
pub fn validate_lesson(lesson: &Lesson) -> Result<()> {
    for (qi, quiz) in lesson.quizzes.iter().enumerate() {
        for (i, q) in quiz.questions.iter().enumerate() {
            if q.answer >= q.options.len() {
                return Err(FetchError::Format(format!(
                    "{}, pregunta {}: respuesta {} fuera de rango ({} opciones)",
                    quiz.label(qi),
                    i + 1,
                    q.answer,
                    q.options.len()
                )));
            }
        }
    }
    Ok(())
}
